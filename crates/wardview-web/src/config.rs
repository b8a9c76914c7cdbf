/// Static dashboard configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    /// File name the hospital export system produces
    pub expected_file: &'static str,

    pub columns: &'static [ColumnHelp],
    pub changelog: &'static [ChangelogEntry],
}

/// One expected CSV column, described for the welcome screen
pub struct ColumnHelp {
    pub name: &'static str,
    pub meaning: &'static str,
    pub example: &'static str,
}

pub struct ChangelogEntry {
    pub date: &'static str,
    pub event: &'static str,
}

pub static CONFIG: Config = Config {
    name: "WardView",
    tagline: "Hospital service revenue dashboard",

    expected_file: "unique_data.csv",

    columns: &[
        ColumnHelp {
            name: "nam",
            meaning: "Year of the admission",
            example: "2023",
        },
        ColumnHelp {
            name: "thang",
            meaning: "Month of the admission (1-12)",
            example: "7",
        },
        ColumnHelp {
            name: "tongdoanhthu",
            meaning: "Revenue in VND, comma separators allowed",
            example: "1,500,000",
        },
        ColumnHelp {
            name: "sotiepnhan",
            meaning: "Admission count",
            example: "128",
        },
        ColumnHelp {
            name: "tennhomdichvu",
            meaning: "Service group name",
            example: "Xét nghiệm",
        },
        ColumnHelp {
            name: "tendichvu",
            meaning: "Service name",
            example: "Công thức máu",
        },
        ColumnHelp {
            name: "loai_dich_vu",
            meaning: "Service kind",
            example: "Ngoại trú",
        },
        ColumnHelp {
            name: "ngay_tiep_nhan",
            meaning: "Admission date",
            example: "2023-07-14",
        },
    ],

    // Changelog entries - newest first
    changelog: &[
        ChangelogEntry {
            date: "2026-08-12",
            event: "Service kind sunburst breakdown",
        },
        ChangelogEntry {
            date: "2026-07-30",
            event: "Chart height control and detail table",
        },
        ChangelogEntry {
            date: "2026-07-18",
            event: "First dashboard release",
        },
    ],
};
