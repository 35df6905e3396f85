use serde::{Deserialize, Serialize};
use std::fmt;

/// Specialization category a message is routed under.
///
/// `General` is not part of the user-facing catalog; it is the handler that
/// unrecognized identifiers resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Coding,
    WebDev,
    Automation,
    AppDev,
    DataAnalytics,
    Music,
    Search,
    General,
}

impl Capability {
    /// Every capability with a dedicated handler, in catalog order, followed by `General`.
    pub const ALL: [Capability; 8] = [
        Capability::Coding,
        Capability::WebDev,
        Capability::Automation,
        Capability::AppDev,
        Capability::DataAnalytics,
        Capability::Music,
        Capability::Search,
        Capability::General,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::WebDev => "web-dev",
            Self::Automation => "automation",
            Self::AppDev => "app-dev",
            Self::DataAnalytics => "data-analytics",
            Self::Music => "music",
            Self::Search => "search",
            Self::General => "general",
        }
    }

    /// Exact identifier lookup.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Lookup that never fails: anything unknown routes to `General`.
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or(Self::General)
    }

    /// Catalog entry for this capability. `General` has none.
    pub fn info(&self) -> Option<&'static CapabilityInfo> {
        CATALOG.iter().find(|info| info.id == self.id())
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Static catalog entry shown in the capability picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub tags: &'static [&'static str],
}

pub static CATALOG: [CapabilityInfo; 7] = [
    CapabilityInfo {
        id: "coding",
        name: "Advanced Coding",
        description: "Python, JS, C++, Node.js & more",
        icon: "fas fa-code",
        color: "primary",
        tags: &["Python", "JavaScript", "C++", "Node.js"],
    },
    CapabilityInfo {
        id: "web-dev",
        name: "Web Development",
        description: "Full-stack web applications",
        icon: "fas fa-globe",
        color: "accent",
        tags: &["React", "Node.js", "API"],
    },
    CapabilityInfo {
        id: "automation",
        name: "Automation",
        description: "Scripts & workflow automation",
        icon: "fas fa-robot",
        color: "yellow-500",
        tags: &["Scripts", "Workflows"],
    },
    CapabilityInfo {
        id: "app-dev",
        name: "App Development",
        description: "Mobile & desktop applications",
        icon: "fas fa-mobile-alt",
        color: "pink-500",
        tags: &["React Native", "Flutter"],
    },
    CapabilityInfo {
        id: "data-analytics",
        name: "Data Analytics",
        description: "Advanced data science & ML",
        icon: "fas fa-chart-line",
        color: "blue-400",
        tags: &["Pandas", "ML", "Analytics"],
    },
    CapabilityInfo {
        id: "music",
        name: "Music Generation",
        description: "AI-powered music creation",
        icon: "fas fa-music",
        color: "purple-400",
        tags: &["MIDI", "Audio"],
    },
    CapabilityInfo {
        id: "search",
        name: "Deep Search",
        description: "Advanced information retrieval",
        icon: "fas fa-search",
        color: "emerald-400",
        tags: &["Web", "Research"],
    },
];

/// Whether `id` names an entry of the static catalog.
pub fn is_catalog_id(id: &str) -> bool {
    CATALOG.iter().any(|info| info.id == id)
}
