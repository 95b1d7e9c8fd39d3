use crate::error::Error;
use std::collections::BTreeMap;

// ----------------------------------------------------------------------------
// Source URLs
// ----------------------------------------------------------------------------

pub const BGC_MIBIG_URL: &str =
    "https://gwu.box.com/shared/static/s9g2v012kyy97p50juy4boybeojrfhda.gz";
pub const FUNGI_BOWTIE2_URL: &str =
    "https://gwu.box.com/shared/static/mm6oxn4ovfcc5rhaly27lxh40c3filro.gz";
pub const HUMAN_GRCH38_BOWTIE2_URL: &str =
    "https://gwu.box.com/shared/static/b0uu1sqyk1y6rb4wzllssxv1vox84205.gz";
pub const VIRAL_BOWTIE2_URL: &str =
    "https://gwu.box.com/shared/static/pho5jc7nwbr00hxqboxew7zrug4p6bvf.gz";
pub const BACTERIAL_BOWTIE2_URL: &str =
    "https://gwu.box.com/shared/static/ibzpdz9fac2twxssquunp99rcld9aaf5.gz";
pub const ARCHAEAL_BOWTIE2_URL: &str =
    "https://gwu.box.com/shared/static/afj4s72zi0hbjgbt1ga6j35icf93nypp.gz";

// ----------------------------------------------------------------------------
// Database
// ----------------------------------------------------------------------------

/// One named database: its config label and the downloadable builds.
///
/// An empty url marks a build that is not available for download yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Database {
    /// Key under which the install path is recorded in the config file.
    pub label: String,
    pub builds: BTreeMap<String, String>,
}

// ----------------------------------------------------------------------------
// Catalog
// ----------------------------------------------------------------------------

/// Immutable table of known (database, build) -> source url.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub databases: BTreeMap<String, Database>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            databases: BTreeMap::new(),
        }
    }

    /// The databases compiled into this release.
    pub fn builtin() -> Self {
        let databases = [
            ("bgc", "MIBiG", vec![("MIBiG", BGC_MIBIG_URL)]),
            (
                "fungi",
                "fungi",
                vec![
                    ("fungiFasta", ""),
                    ("fungiBowtie2Index", FUNGI_BOWTIE2_URL),
                ],
            ),
            (
                "human",
                "human",
                vec![
                    ("GRCh38Bt2", HUMAN_GRCH38_BOWTIE2_URL),
                    ("T2T-CHM13Bt2", ""),
                ],
            ),
            (
                "viral",
                "viral",
                vec![
                    ("viralFasta", ""),
                    ("viralBowtie2Index", VIRAL_BOWTIE2_URL),
                ],
            ),
            (
                "bacterial",
                "bacterial",
                vec![
                    ("bacterialFasta", ""),
                    ("bacterialBowtie2Index", BACTERIAL_BOWTIE2_URL),
                ],
            ),
            (
                "archaeal",
                "archaeal",
                vec![
                    ("archaealFasta", ""),
                    ("archaealBowtie2Index", ARCHAEAL_BOWTIE2_URL),
                ],
            ),
        ];

        let databases = databases
            .into_iter()
            .map(|(database, label, builds)| {
                let builds = builds
                    .into_iter()
                    .map(|(build, url)| (build.to_string(), url.to_string()))
                    .collect();
                let database_entry = Database {
                    label: label.to_string(),
                    builds,
                };
                (database.to_string(), database_entry)
            })
            .collect();

        Catalog { databases }
    }

    /// Resolve a (database, build) selection to its source url.
    ///
    /// Placeholder builds with an empty url fail the same way an absent
    /// build does, there is nothing to download for them.
    pub fn lookup(&self, database: &str, build: &str) -> Result<&str, Error> {
        let entry = self.databases.get(database).ok_or_else(|| Error::UnknownDatabase {
            database: database.to_string(),
        })?;

        let url = entry.builds.get(build).ok_or_else(|| Error::UnknownBuild {
            database: database.to_string(),
            build: build.to_string(),
        })?;

        if url.is_empty() {
            return Err(Error::UnknownBuild {
                database: database.to_string(),
                build: build.to_string(),
            });
        }

        Ok(url)
    }

    /// Config label for a database.
    pub fn label(&self, database: &str) -> Result<&str, Error> {
        let entry = self.databases.get(database).ok_or_else(|| Error::UnknownDatabase {
            database: database.to_string(),
        })?;

        Ok(&entry.label)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
