#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use holiday_grid::PipelineConfig;
use tempfile::TempDir;

/// Header of a `subdivisions.csv` fixture
pub const SUBDIVISION_HEADER: &str = "Code;ShortName;Name;Category;Country;Parent";

/// Header of a public holiday fixture
pub const PUBLIC_HEADER: &str = "Name;StartDate;EndDate;Subdivisions;RegionalScope;TemporalScope";

/// Header of a school holiday fixture
pub const SCHOOL_HEADER: &str = "Name;StartDate;EndDate;Subdivisions";

/// A throwaway `data/src` tree plus an output directory
pub struct DataTree {
    dir: TempDir,
}

impl DataTree {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Root of the per-country reference tables
    #[must_use]
    pub fn data_root(&self) -> PathBuf {
        self.dir.path().join("data").join("src")
    }

    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Write a file below `data/src/<country>/`
    pub fn write(&self, country: &str, relative: &str, lines: &[&str]) -> PathBuf {
        let path = self.data_root().join(country).join(relative);
        write_lines(&path, lines);
        path
    }

    /// Configuration reading from and writing to this tree
    #[must_use]
    pub fn config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_data_root(self.data_root())
            .with_output_dir(self.output_dir())
            .with_parallel(false)
    }
}

fn write_lines(path: &Path, lines: &[&str]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create fixture directory");
    }
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(path, contents).expect("failed to write fixture");
}

/// Spain with two provinces, one national public holiday and one regional
/// school week covering Seville only
#[must_use]
pub fn spain_fixture() -> DataTree {
    let tree = DataTree::new();
    tree.write(
        "es",
        "subdivisions.csv",
        &[
            SUBDIVISION_HEADER,
            "ES-AN;AN;ES Andalucía,EN Andalusia;ES comunidad autónoma,EN autonomous community;ES;",
            "ES-SE;SE;ES Sevilla,EN Seville;ES provincia,EN province;ES;ES-AN",
            "ES-M;M;ES Madrid,EN Madrid;ES provincia,EN province;ES;ES-MD",
        ],
    );
    tree.write(
        "es",
        "holidays/holidays.public.csv",
        &[
            PUBLIC_HEADER,
            "ES Año Nuevo,EN New Year's Day;2025-01-01;;;National;FullDay",
        ],
    );
    tree.write(
        "es",
        "holidays/holidays.school.2025.csv",
        &[
            SCHOOL_HEADER,
            "ES Semana Santa,EN Easter holidays;2025-04-14;2025-04-20;ES-AN",
        ],
    );
    tree
}

/// France with two departments and school holidays split over two files
#[must_use]
pub fn france_fixture() -> DataTree {
    let tree = DataTree::new();
    tree.write(
        "fr",
        "subdivisions.csv",
        &[
            SUBDIVISION_HEADER,
            "FR-ARA;ARA;FR Auvergne-Rhône-Alpes;FR région,EN region;FR;",
            "FR-01;01;FR Ain;FR département,EN department;FR;FR-ARA",
            "FR-75;75;FR Paris;FR département,EN department;FR;FR-IDF",
        ],
    );
    tree.write(
        "fr",
        "holidays/holidays.public.csv",
        &[
            PUBLIC_HEADER,
            "FR Jour de l'an,EN New Year's Day;2025-01-01;2025-01-01;;National;FullDay",
            "FR Saint-Étienne,EN St. Stephen's Day;2025-12-26;;FR-ARA;Regional;FullDay",
        ],
    );
    tree.write(
        "fr",
        "holidays/holidays.school.2024-2025.csv",
        &[
            SCHOOL_HEADER,
            "FR Vacances d'hiver,EN Winter holidays;2025-02-08;2025-02-23;FR-ARA",
        ],
    );
    tree.write(
        "fr",
        "holidays/holidays.school.2025-2026.csv",
        &[
            SCHOOL_HEADER,
            "FR Vacances de la Toussaint,EN Autumn holidays;2025-10-18;2025-11-02;01,75",
        ],
    );
    tree
}

/// Read an exported table as header + rows of fields
#[must_use]
pub fn read_output(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .expect("failed to open output");
    let header = reader
        .headers()
        .expect("missing header")
        .iter()
        .map(ToString::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("invalid output row")
                .iter()
                .map(ToString::to_string)
                .collect()
        })
        .collect();
    (header, rows)
}
