//! Categorical cylinder selections.
//!
//! Both enums are closed sets: the serialized labels are part of the
//! trained-model contract and must match the training data exactly.

use super::errors::SelectionError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Role of the cylinder on the excavator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApplicationType {
    #[serde(rename = "Arm Cylinder")]
    Arm,
    #[serde(rename = "Boom Cylinder")]
    Boom,
    #[serde(rename = "Bucket Cylinder")]
    Bucket,
    #[serde(rename = "Blade Cylinder")]
    Blade,
    #[serde(rename = "Swing Cylinder")]
    Swing,
}

impl ApplicationType {
    pub const ALL: [ApplicationType; 5] = [
        ApplicationType::Arm,
        ApplicationType::Boom,
        ApplicationType::Bucket,
        ApplicationType::Blade,
        ApplicationType::Swing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::Arm => "Arm Cylinder",
            ApplicationType::Boom => "Boom Cylinder",
            ApplicationType::Bucket => "Bucket Cylinder",
            ApplicationType::Blade => "Blade Cylinder",
            ApplicationType::Swing => "Swing Cylinder",
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationType {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| SelectionError::UnknownApplication(s.to_string()))
    }
}

/// End-of-stroke damping mechanism code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CushionType {
    #[serde(rename = "NC")]
    Nc,
    #[serde(rename = "CC")]
    Cc,
    #[serde(rename = "CH")]
    Ch,
    #[serde(rename = "CB")]
    Cb,
}

impl CushionType {
    pub const ALL: [CushionType; 4] = [
        CushionType::Nc,
        CushionType::Cc,
        CushionType::Ch,
        CushionType::Cb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CushionType::Nc => "NC",
            CushionType::Cc => "CC",
            CushionType::Ch => "CH",
            CushionType::Cb => "CB",
        }
    }
}

impl fmt::Display for CushionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CushionType {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SelectionError::UnknownCushion(s.to_string()))
    }
}

/// The two categorical choices of one estimation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CylinderSelection {
    pub application: ApplicationType,
    pub cushion: CushionType,
}
