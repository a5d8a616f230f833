//! Built-in passphrase word lists.
//!
//! Three read-only, process-wide corpora of lowercase words. Lists are
//! sampled with replacement, so duplicate words in one passphrase are
//! possible and intended.

use crate::types::passphrase::WordListId;

/// Returns the words of a list.
pub fn words(list: WordListId) -> &'static [&'static str] {
    match list {
        WordListId::Common => COMMON,
        WordListId::Memorable => MEMORABLE,
        WordListId::Technical => TECHNICAL,
    }
}

const COMMON: &[&str] = &[
    "ability", "account", "achieve", "address", "advance", "against", "already", "another",
    "anxiety", "arrange", "balance", "battery", "believe", "between", "brother",
    "business", "cabinet", "captain", "careful", "century", "certain", "chamber",
    "chapter", "chicken", "citizen", "climate", "collect", "combine", "comfort", "company",
    "compare", "compete", "complex", "concept", "concern", "conduct", "confirm", "connect",
    "consent", "content", "context", "control", "convert", "correct", "council", "country",
    "courage", "culture", "current", "decimal", "declare", "default", "deliver", "density",
    "deposit", "develop", "digital", "discuss", "display", "distant", "dolphin", "dynamic",
    "eclipse", "educate", "element", "emotion", "evening", "exactly", "example",
    "exercise", "explain", "explore", "factory", "failure", "fashion", "feature",
    "fiction", "finance", "forward", "freedom", "gallery", "general", "glimpse", "gravity",
    "habitat", "harmony", "harvest", "healthy", "history", "horizon", "housing", "husband",
    "illusion", "improve", "include", "journey", "justice", "kitchen", "knowledge",
    "liberty", "library", "machine", "manager", "measure", "message", "million", "mineral",
    "mission", "mystery", "natural", "network", "observe", "october", "opinion", "organic",
    "outcome", "package", "paradox", "partner", "pattern", "penalty", "perfect", "phoenix",
    "picture", "pioneer", "plastic", "popular", "poverty", "practice", "prepare",
    "present", "prevent", "primary", "private", "problem", "process", "product", "profile",
    "program", "project", "promise", "protect", "provide", "publish", "purpose", "quality",
    "quarter", "question", "rainbow", "realize", "receive", "reflect", "regular",
    "release", "replace", "require", "reserve", "resolve", "respect", "respond", "restore",
    "reverse", "science", "section", "segment", "service", "session", "silence", "similar",
    "society", "soldier", "solution", "someone", "special", "station", "storage",
    "strange", "strategy", "student", "subject", "success", "suggest", "support",
    "surface", "surplus", "survive", "suspect", "sustain", "teacher", "theater", "theory",
    "through", "tonight", "traffic", "transfer", "trigger", "trouble", "uniform",
    "universe", "unknown", "upgrade", "utility", "variety", "vehicle", "venture",
    "version", "victory", "village", "vintage", "virtual", "visible", "volcano", "volume",
    "warrior", "weather", "welcome", "western", "whisper", "witness", "wonderful",
    "workshop",
];

const MEMORABLE: &[&str] = &[
    "apple", "banana", "cherry", "dragon", "eagle", "forest", "golden", "happy", "island",
    "jungle", "kitten", "lemon", "magic", "night", "ocean", "panda", "queen", "river",
    "sun", "tiger", "unicorn", "valley", "water", "yellow", "zebra", "adventure",
    "balloon", "castle", "diamond", "energy", "flower", "guitar", "honey", "icecream",
    "joyful", "koala", "lightning", "mountain", "ninja", "orange", "purple", "quantum",
    "rocket", "silver", "thunder", "umbrella", "violet", "winter", "crystal", "starlight",
];

const TECHNICAL: &[&str] = &[
    "algorithm", "application", "bandwidth", "benchmark", "binary", "blockchain",
    "boolean", "browser", "buffer", "cache", "callback", "cipher", "cluster", "compiler",
    "compute", "constant", "container", "database", "debugger", "decrypt", "deployment",
    "digital", "directory", "download", "element", "encrypt", "endpoint", "execute",
    "firewall", "framework", "frontend", "function", "gateway", "gigabyte", "hardware",
    "hosting", "integer", "interface", "kernel", "keyboard", "latency", "library",
    "localhost", "logic", "malware", "memory", "metadata", "monitor", "network", "object",
    "operating", "optimize", "overflow", "packet", "parameter", "password", "platform",
    "pointer", "protocol", "query", "recursion", "registry", "render", "repository",
    "router", "runtime", "sandbox", "script", "security", "server", "session", "snapshot",
    "software", "storage", "syntax", "terminal", "thread", "timeout", "token", "unicode",
    "upload", "variable", "virtual", "virus", "widget", "workflow",
];
