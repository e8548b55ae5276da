use cod_core::ID;
use cod_core::Unique;

/// Campus pickup spot, e.g. "Kantin Barat" in building "ANGGREK".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: ID<Self>,
    name: String,
    building: String,
    floor: Option<String>,
    description: String,
    active: bool,
}

impl Location {
    pub fn new(
        id: ID<Self>,
        name: String,
        building: String,
        floor: Option<String>,
        description: String,
        active: bool,
    ) -> Self {
        Self {
            id,
            name,
            building,
            floor,
            description,
            active,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn building(&self) -> &str {
        &self.building
    }
    pub fn floor(&self) -> Option<&str> {
        self.floor.as_deref()
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn active(&self) -> bool {
        self.active
    }
}

impl Unique for Location {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use cod_pg::*;

    impl Schema for Location {
        fn name() -> &'static str {
            LOCATIONS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                LOCATIONS,
                " (
                    id          BIGSERIAL PRIMARY KEY,
                    name        VARCHAR(100) NOT NULL,
                    building    VARCHAR(100) NOT NULL,
                    floor       VARCHAR(50),
                    description VARCHAR(500) NOT NULL,
                    active      BOOLEAN NOT NULL DEFAULT TRUE
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_cod_locations_active ON ",
                LOCATIONS,
                " (active) WHERE active;"
            )
        }
    }
}
