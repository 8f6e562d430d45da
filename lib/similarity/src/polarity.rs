//! Lipophilic / hydrophilic majority vote over a descriptor set

use crate::lexicon::{Polarity, PolarityLexicon};
use flavorlab_core::DescriptorSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolarityKind {
    Lipophilic,
    Hydrophilic,
    /// Tie, or no classified descriptor at all (check `total`)
    Balanced,
}

/// Aggregated polarity counts of a descriptor set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarityProfile {
    #[serde(rename = "type")]
    pub kind: PolarityKind,
    pub lipophilic_count: usize,
    pub hydrophilic_count: usize,
    pub total: usize,
}

impl PolarityProfile {
    /// `false` when no descriptor was found in the lexicon; the kind is then
    /// `Balanced` by default and carries no information
    pub fn has_signal(&self) -> bool {
        self.total > 0
    }

    /// Lipophilic share as a whole percentage, `None` without signal
    pub fn lipophilic_share(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        Some((self.lipophilic_count * 100 / self.total) as u8)
    }
}

/// Count classified descriptors and take the majority
pub fn classify_polarity(descriptors: &DescriptorSet, lexicon: &PolarityLexicon) -> PolarityProfile {
    let mut lipophilic_count = 0;
    let mut hydrophilic_count = 0;

    for descriptor in descriptors.iter() {
        match lexicon.get(descriptor) {
            Some(Polarity::Lipophilic) => lipophilic_count += 1,
            Some(Polarity::Hydrophilic) => hydrophilic_count += 1,
            None => {}
        }
    }

    let kind = if lipophilic_count > hydrophilic_count {
        PolarityKind::Lipophilic
    } else if hydrophilic_count > lipophilic_count {
        PolarityKind::Hydrophilic
    } else {
        PolarityKind::Balanced
    };

    PolarityProfile {
        kind,
        lipophilic_count,
        hydrophilic_count,
        total: lipophilic_count + hydrophilic_count,
    }
}
