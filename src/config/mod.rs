// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process configuration, loaded once at start-up

use thiserror::Error;

use crate::articles::StoreConfig;
use crate::content::ExtractorConfig;
use crate::generation::GenerationConfig;
use crate::pipeline::PipelineConfig;
use crate::search::SearchConfig;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {section} configuration: {message}")]
    Invalid {
        section: &'static str,
        message: String,
    },
}

impl ConfigError {
    fn invalid(section: &'static str) -> impl FnOnce(String) -> Self {
        move |message| ConfigError::Invalid { section, message }
    }
}

/// Every configuration section of the enricher
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub search: SearchConfig,
    pub extractor: ExtractorConfig,
    pub generation: GenerationConfig,
    pub pipeline: PipelineConfig,
}

impl AppConfig {
    /// Load every section from environment variables
    ///
    /// The provenance label of the pipeline follows the generation
    /// provider.
    pub fn from_env() -> Self {
        let generation = GenerationConfig::from_env();
        let pipeline = PipelineConfig {
            provenance_label: generation.provider_label(),
            ..PipelineConfig::from_env()
        };

        Self {
            store: StoreConfig::from_env(),
            search: SearchConfig::from_env(),
            extractor: ExtractorConfig::from_env(),
            generation,
            pipeline,
        }
    }

    /// Validate every section, reporting the first invalid one
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate().map_err(ConfigError::invalid("store"))?;
        self.search.validate().map_err(ConfigError::invalid("search"))?;
        self.extractor
            .validate()
            .map_err(ConfigError::invalid("extractor"))?;
        self.generation
            .validate()
            .map_err(ConfigError::invalid("generation"))?;
        self.pipeline
            .validate()
            .map_err(ConfigError::invalid("pipeline"))?;
        Ok(())
    }
}
