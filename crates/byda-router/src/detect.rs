/// Keyword detector producing a best-effort metadata tag.
///
/// Rules are checked in order against the lowercased message; the first rule
/// with any matching keyword wins.
#[derive(Debug)]
pub struct Detector {
    /// Metadata field the result is stored under
    pub key: &'static str,
    rules: &'static [(&'static [&'static str], &'static str)],
    fallback: &'static str,
}

impl Detector {
    pub fn detect(&self, message: &str) -> &'static str {
        let message = message.to_lowercase();
        self.rules
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
            .map(|(_, value)| *value)
            .unwrap_or(self.fallback)
    }
}

pub static LANGUAGE: Detector = Detector {
    key: "language",
    rules: &[
        (&["python"], "python"),
        (&["javascript"], "javascript"),
        (&["typescript"], "typescript"),
        (&["java"], "java"),
        (&["c++"], "c++"),
        (&["c#"], "c#"),
        (&["go"], "go"),
        (&["rust"], "rust"),
        (&["php"], "php"),
    ],
    fallback: "unknown",
};

pub static FRAMEWORK: Detector = Detector {
    key: "framework",
    rules: &[
        (&["react"], "react"),
        (&["vue"], "vue"),
        (&["angular"], "angular"),
        (&["express"], "express"),
        (&["fastapi"], "fastapi"),
        (&["django"], "django"),
        (&["flask"], "flask"),
    ],
    fallback: "unknown",
};

pub static AUTOMATION_TYPE: Detector = Detector {
    key: "automationType",
    rules: &[
        (&["workflow"], "workflow"),
        (&["schedule"], "scheduling"),
        (&["api"], "api-integration"),
    ],
    fallback: "general",
};

pub static PLATFORM: Detector = Detector {
    key: "platform",
    rules: &[
        (&["mobile"], "mobile"),
        (&["desktop"], "desktop"),
        (&["web"], "web"),
    ],
    fallback: "cross-platform",
};

pub static DATA_TYPE: Detector = Detector {
    key: "dataType",
    rules: &[
        (&["ml", "machine learning"], "ml"),
        (&["visualization"], "visualization"),
        (&["statistics"], "statistics"),
    ],
    fallback: "analysis",
};

pub static MUSIC_TYPE: Detector = Detector {
    key: "musicType",
    rules: &[
        (&["midi"], "midi"),
        (&["audio"], "audio"),
        (&["composition"], "composition"),
    ],
    fallback: "general",
};

pub static SEARCH_TYPE: Detector = Detector {
    key: "searchType",
    rules: &[
        (&["research"], "research"),
        (&["fact"], "fact-checking"),
        (&["analysis"], "analysis"),
    ],
    fallback: "general",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        // "javascript" contains "java" but is listed first
        assert_eq!(LANGUAGE.detect("Port this JavaScript"), "javascript");
        assert_eq!(LANGUAGE.detect("a java class"), "java");
        assert_eq!(LANGUAGE.detect("nothing here"), "unknown");
    }

    #[test]
    fn test_substring_matching_is_loose() {
        // "algorithm" contains "go"
        assert_eq!(LANGUAGE.detect("explain this algorithm"), "go");
        // "html" contains "ml"
        assert_eq!(DATA_TYPE.detect("parse html tables"), "ml");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(FRAMEWORK.detect("plain"), "unknown");
        assert_eq!(AUTOMATION_TYPE.detect("plain"), "general");
        assert_eq!(PLATFORM.detect("plain"), "cross-platform");
        assert_eq!(DATA_TYPE.detect("plain"), "analysis");
        assert_eq!(MUSIC_TYPE.detect("plain"), "general");
        assert_eq!(SEARCH_TYPE.detect("plain"), "general");
    }

    #[test]
    fn test_mapped_values() {
        assert_eq!(AUTOMATION_TYPE.detect("Schedule a backup"), "scheduling");
        assert_eq!(AUTOMATION_TYPE.detect("call the API"), "api-integration");
        assert_eq!(DATA_TYPE.detect("Machine Learning pipeline"), "ml");
        assert_eq!(SEARCH_TYPE.detect("check this fact"), "fact-checking");
        assert_eq!(PLATFORM.detect("a Desktop app"), "desktop");
        assert_eq!(MUSIC_TYPE.detect("MIDI file"), "midi");
        assert_eq!(FRAMEWORK.detect("Django models"), "django");
    }
}
