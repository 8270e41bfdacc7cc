//! Fixed section list and panel chrome.
//!
//! Sections are opaque to the overlay machinery: order determines display
//! order, content lives elsewhere. The list and the header/footer strings
//! are built once at panel construction.

/// One settings section entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionItem {
    /// Stable identifier, also used for widget ids.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
}

/// Header chrome for the settings panel.
#[derive(Clone, Copy, Debug)]
pub struct HeaderChrome {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Footer chrome for the settings panel.
#[derive(Clone, Copy, Debug)]
pub struct FooterChrome {
    pub hint: &'static str,
}

/// The fixed, ordered section list.
pub fn create_sections() -> Vec<SectionItem> {
    vec![
        SectionItem { id: "general", label: "General" },
        SectionItem { id: "graphics", label: "Graphics" },
        SectionItem { id: "gameplay", label: "Gameplay" },
        SectionItem { id: "audio", label: "Audio" },
        SectionItem { id: "skin", label: "Skin" },
        SectionItem { id: "input", label: "Input" },
        SectionItem { id: "online", label: "Online" },
        SectionItem { id: "maintenance", label: "Maintenance" },
        SectionItem { id: "debug", label: "Debug" },
    ]
}

pub fn create_header() -> HeaderChrome {
    HeaderChrome {
        title: "settings",
        subtitle: "Change the way Tempo behaves",
    }
}

pub fn create_footer() -> FooterChrome {
    FooterChrome {
        hint: "Press Esc to close",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_is_stable() {
        let sections = create_sections();
        let ids: Vec<_> = sections.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            [
                "general",
                "graphics",
                "gameplay",
                "audio",
                "skin",
                "input",
                "online",
                "maintenance",
                "debug"
            ]
        );
    }

    #[test]
    fn test_chrome() {
        assert_eq!(create_header().title, "settings");
        assert!(!create_footer().hint.is_empty());
    }
}
