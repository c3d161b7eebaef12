/// Document, spreadsheet, presentation and drawing formats the office suite imports.
pub const OFFICE_EXTENSIONS: &[&str] = &[
    ".bib", ".doc", ".xml", ".docx", ".fodt", ".html", ".ltx", ".txt", ".odt", ".ott", ".pdb",
    ".psw", ".rtf", ".sdw", ".stw", ".sxw", ".uot", ".vor", ".wps", ".epub", ".png", ".bmp",
    ".emf", ".eps", ".fodg", ".gif", ".jpg", ".jpeg", ".met", ".odd", ".otg", ".pbm", ".pct",
    ".pgm", ".ppm", ".ras", ".std", ".svg", ".svm", ".swf", ".sxd", ".tif", ".tiff", ".xhtml",
    ".xpm", ".fodp", ".odg", ".odp", ".otp", ".potm", ".pot", ".pptx", ".pps", ".ppt", ".pwp",
    ".sda", ".sdd", ".sti", ".sxi", ".uop", ".wmf", ".csv", ".dbf", ".dif", ".fods", ".ods",
    ".ots", ".pxl", ".sdc", ".slk", ".stc", ".sxc", ".uos", ".xls", ".xlt", ".xlsx",
];
