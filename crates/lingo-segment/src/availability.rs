use std::sync::OnceLock;

use lingo_core::BackendId;
use serde::Serialize;

/// Which optional backends can run in this process. Naive always can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub icu: bool,
    pub thai: bool,
}

impl Availability {
    pub const ALL: Availability = Availability {
        icu: true,
        thai: true,
    };

    pub const NAIVE_ONLY: Availability = Availability {
        icu: false,
        thai: false,
    };

    /// Probe compiled-in backends once per process.
    pub fn probe() -> Self {
        static PROBE: OnceLock<Availability> = OnceLock::new();
        *PROBE.get_or_init(|| {
            let availability = Availability {
                icu: crate::icu::probe(),
                thai: cfg!(feature = "thai"),
            };
            tracing::info!(
                icu = availability.icu,
                thai = availability.thai,
                "Segmentation backends probed"
            );
            availability
        })
    }

    pub fn is_available(&self, backend: BackendId) -> bool {
        match backend {
            BackendId::Icu => self.icu,
            BackendId::Thai => self.thai,
            BackendId::Naive => true,
        }
    }

    pub fn without(self, backend: BackendId) -> Self {
        match backend {
            BackendId::Icu => Self { icu: false, ..self },
            BackendId::Thai => Self {
                thai: false,
                ..self
            },
            BackendId::Naive => self,
        }
    }

    /// Every combination of the optional backends
    pub fn all_combinations() -> [Availability; 4] {
        [
            Availability::NAIVE_ONLY,
            Availability {
                icu: true,
                thai: false,
            },
            Availability {
                icu: false,
                thai: true,
            },
            Availability::ALL,
        ]
    }
}
