//! Main service enumeration and its sub-service catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MARKETING_SUB_SERVICES: &[&str] = &[
    "Brand Strategy",
    "Social Media Management",
    "SEO Audit and Setup",
    "Digital Marketing Consulting",
    "Social Media Advertising",
    "Brand Strategy Sample",
];

const TECHNOLOGY_SUB_SERVICES: &[&str] = &[
    "Web site development",
    "Web system development",
    "Standalone system",
    "Cloud solution",
    "AI solutions",
    "UI/UX solutions",
];

const DESIGN_SUB_SERVICES: &[&str] = &[
    "Video and advertising",
    "Brand identity development",
    "Package design",
    "Creative content",
];

/// Top-level engagement category a lead is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainService {
    Marketing,
    Technology,
    Design,
}

/// A main service label that is not part of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown main service: {0:?}")]
pub struct UnknownService(pub String);

impl MainService {
    /// All main services in menu order
    pub const ALL: [MainService; 3] = [Self::Marketing, Self::Technology, Self::Design];

    pub fn label(self) -> &'static str {
        match self {
            Self::Marketing => "Marketing",
            Self::Technology => "Technology",
            Self::Design => "Design",
        }
    }

    /// Ordered sub-service labels offered under this main service
    pub fn sub_services(self) -> &'static [&'static str] {
        match self {
            Self::Marketing => MARKETING_SUB_SERVICES,
            Self::Technology => TECHNOLOGY_SUB_SERVICES,
            Self::Design => DESIGN_SUB_SERVICES,
        }
    }

    /// Whether `sub_service` is one of this service's offerings (exact match)
    pub fn offers(self, sub_service: &str) -> bool {
        self.sub_services().contains(&sub_service)
    }

    /// Position within [`MainService::ALL`]
    pub fn index(self) -> usize {
        match self {
            Self::Marketing => 0,
            Self::Technology => 1,
            Self::Design => 2,
        }
    }

    /// Pick the service named by the last non-empty segment of a page path.
    ///
    /// `/Marketing` selects Marketing, `/marketing/seo` selects nothing.
    /// Matching is case-sensitive.
    pub fn from_route(path: &str) -> Option<Self> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .next_back()
            .and_then(|segment| segment.parse().ok())
    }
}

impl FromStr for MainService {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Marketing" => Ok(Self::Marketing),
            "Technology" => Ok(Self::Technology),
            "Design" => Ok(Self::Design),
            other => Err(UnknownService(other.to_string())),
        }
    }
}

impl fmt::Display for MainService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
