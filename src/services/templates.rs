//! Fixed catalog of password presets.

use crate::types::template::Template;

/// The six built-in presets, in display order.
pub static TEMPLATES: [Template; 6] = [
    Template {
        id: "ultra-secure",
        name: "Ultra Secure",
        description: "Maximum security with all character types",
        length: 32,
        lowercase: true,
        uppercase: true,
        numbers: true,
        symbols: true,
    },
    Template {
        id: "memorable",
        name: "Memorable",
        description: "Easier to remember without symbols",
        length: 16,
        lowercase: true,
        uppercase: true,
        numbers: true,
        symbols: false,
    },
    Template {
        id: "wifi",
        name: "WiFi Password",
        description: "Perfect for routers (no symbols)",
        length: 20,
        lowercase: true,
        uppercase: true,
        numbers: true,
        symbols: false,
    },
    Template {
        id: "email",
        name: "Email Account",
        description: "Balanced security for email",
        length: 18,
        lowercase: true,
        uppercase: true,
        numbers: true,
        symbols: true,
    },
    Template {
        id: "pin",
        name: "PIN Code",
        description: "Numbers only for PIN codes",
        length: 6,
        lowercase: false,
        uppercase: false,
        numbers: true,
        symbols: false,
    },
    Template {
        id: "database",
        name: "Database/API",
        description: "Strong for development use",
        length: 24,
        lowercase: true,
        uppercase: true,
        numbers: true,
        symbols: true,
    },
];

pub fn all() -> &'static [Template] {
    &TEMPLATES
}

/// Looks a preset up by its id.
pub fn find(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}
