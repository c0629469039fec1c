//! Analysis runner: configuration, validation and scoring of one character.

use crate::coefficient::{
    coef_information, coef_pairwise, DegeneratePolicy, InformationCoefficients,
    PairwiseCoefficients, Rounded,
};
use crate::data::{CharacterData, DEFAULT_SEPARATOR};
use crate::error::{BestcharError, Result};
use crate::profile::{profile_states, StateFrequencyProfile};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

/// Analysis configuration for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Name of the analysis.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Separator between the states of a polymorphic taxon.
    #[serde(default = "default_separator")]
    pub separator: char,
    /// Handling of degenerate logarithm bases.
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            name: "bestchar".to_string(),
            description: None,
            separator: DEFAULT_SEPARATOR,
            degenerate_policy: DegeneratePolicy::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_yaml(&std::fs::read_to_string(path)?)
    }

    /// Save to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(BestcharError::from)
    }

    /// Check that the configuration can be used to parse input.
    pub fn validate(&self) -> Result<()> {
        if self.separator == ' ' || self.separator == '\t' {
            return Err(BestcharError::InvalidParameter(
                "separator cannot be a space or tab; whitespace is stripped from input".to_string(),
            ));
        }
        if self.separator == '\n' || self.separator == '\r' {
            return Err(BestcharError::InvalidParameter(
                "separator cannot be a line break".to_string(),
            ));
        }
        Ok(())
    }
}

/// All coefficients computed for one character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterScore {
    /// Character name.
    pub name: String,
    /// Number of taxa.
    pub n_taxa: usize,
    /// Number of distinct states.
    pub n_states: usize,
    /// State frequencies.
    pub frequencies: StateFrequencyProfile,
    /// Information coefficients.
    pub information: InformationCoefficients,
    /// Separation and Jaccard coefficients.
    pub pairwise: PairwiseCoefficients,
}

impl CharacterScore {
    /// Labelled two-decimal coefficients in report order.
    pub fn coefficients(&self) -> [(&'static str, Rounded); 5] {
        [
            (self.information.intkey.base.label(), self.information.intkey.rounded),
            (self.information.pankhurst.base.label(), self.information.pankhurst.rounded),
            (self.information.normalized.base.label(), self.information.normalized.rounded),
            ("Separation coefficient", self.pairwise.separation_rounded),
            ("Average pairwise Jaccard distance", self.pairwise.jaccard_distance_rounded),
        ]
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl std::fmt::Display for CharacterScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  Taxa:   {}", self.n_taxa)?;
        writeln!(f, "  States: {}", self.n_states)?;
        for (label, value) in self.coefficients() {
            writeln!(f, "  {}={}", label, value)?;
        }
        Ok(())
    }
}

/// Builder for configuring and running a character analysis.
#[derive(Debug, Clone)]
pub struct Analysis {
    name: String,
    description: Option<String>,
    separator: char,
    degenerate_policy: DegeneratePolicy,
}

impl Default for Analysis {
    fn default() -> Self {
        Self::new()
    }
}

impl Analysis {
    /// Create an analysis with default settings.
    pub fn new() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }

    /// Create from a config.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            name: config.name.clone(),
            description: config.description.clone(),
            separator: config.separator,
            degenerate_policy: config.degenerate_policy,
        }
    }

    /// Set the analysis name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the separator between states of a polymorphic taxon.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the handling of degenerate logarithm bases.
    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    /// Convert to a serializable config.
    pub fn to_config(&self, description: Option<&str>) -> AnalysisConfig {
        AnalysisConfig {
            name: self.name.clone(),
            description: description
                .map(|s| s.to_string())
                .or_else(|| self.description.clone()),
            separator: self.separator,
            degenerate_policy: self.degenerate_policy,
        }
    }

    /// Parse a character file with the configured separator.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<CharacterData> {
        self.to_config(None).validate()?;
        CharacterData::from_path(path, self.separator)
    }

    /// Score a character.
    ///
    /// All preconditions are checked before any coefficient is computed, so
    /// a failure never leaves partial results behind.
    pub fn run(&self, character: &CharacterData) -> Result<CharacterScore> {
        self.to_config(None).validate()?;

        let taxa = character.taxa();
        if taxa.n_taxa() < 2 {
            return Err(BestcharError::DegenerateTaxonCount {
                n_taxa: taxa.n_taxa(),
            });
        }

        let frequencies = profile_states(taxa);
        if self.degenerate_policy == DegeneratePolicy::Reject && frequencies.n_states() < 2 {
            return Err(BestcharError::DegenerateCharacter {
                n_states: frequencies.n_states(),
            });
        }

        let information = coef_information(&frequencies, self.degenerate_policy)?;
        let pairwise = coef_pairwise(taxa)?;

        let score = CharacterScore {
            name: character.name().trim().to_string(),
            n_taxa: taxa.n_taxa(),
            n_states: frequencies.n_states(),
            frequencies,
            information,
            pairwise,
        };

        tracing::info!(
            analysis = %self.name,
            character = %score.name,
            n_taxa = score.n_taxa,
            n_states = score.n_states,
            intkey = %score.information.intkey.rounded,
            separation = %score.pairwise.separation_rounded,
            "character scored"
        );

        Ok(score)
    }
}

/// Score a character with default settings.
pub fn score_character(character: &CharacterData) -> Result<CharacterScore> {
    Analysis::new().run(character)
}
