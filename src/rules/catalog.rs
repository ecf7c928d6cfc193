//! The built-in repair-rule catalog.
//!
//! Every entry reverses a corruption actually observed in the wild: text
//! that was encoded as UTF-8 and decoded as cp1252 (once or twice), or
//! characters that degraded to short ASCII markers when undefined cp1252
//! bytes were dropped along the way.
//!
//! Ordering is load-bearing. Double-layer signatures come before the
//! single-layer forms, longer patterns before any shorter pattern they
//! contain, and the generic variation-selector cleanup runs after every
//! literal that embeds the same sequence. Degraded forms whose bytes were
//! dropped entirely are ambiguous (`ðŸ“` could be a pushpin or a memo) and
//! appear only with a disambiguating scope.

use crate::rules::{RepairRule, RuleTable};
use once_cell::sync::Lazy;
use regex::Regex;

static BUILT_IN: Lazy<RuleTable> = Lazy::new(|| {
    RuleTable::new(catalog_rules()).expect("built-in rule catalog must validate")
});

/// The validated built-in rule table.
pub fn built_in_rules() -> &'static RuleTable {
    &BUILT_IN
}

fn catalog_rules() -> Vec<RepairRule> {
    let mut rules = Vec::new();

    // --- Double-layer mojibake (UTF-8 read as cp1252, twice) ---
    rules.extend([
        RepairRule::literal("arrow-2x", "Ã¢Å¾Â¡Ã¯Â¸Â", "➡️"),
        RepairRule::literal("envelope-2x", "Ã¢Å“â€°Ã¯Â¸Â", "✉️"),
        RepairRule::literal("rocket-2x", "Ã°Å¸Å¡â‚¬", "🚀"),
        RepairRule::literal("target-2x", "Ã°Å¸Å½Â¯", "🎯"),
        RepairRule::literal("bulb-2x", "Ã°Å¸â€™Â¡", "💡"),
        RepairRule::literal("chart-2x", "Ã°Å¸â€œË†", "📈"),
        RepairRule::literal("fire-2x", "Ã°Å¸â€Â¥", "🔥"),
        RepairRule::literal("phone-2x", "Ã°Å¸â€œÅ¾", "📞"),
        RepairRule::literal("pin-2x", "Ã°Å¸â€œÂ", "📍"),
        RepairRule::literal("sparkles-2x", "Ã¢Å“Â¨", "✨"),
        RepairRule::literal("check-2x", "Ã¢Å“â€¦", "✅"),
        RepairRule::literal("hourglass-2x", "Ã¢ÂÂ³", "⏳"),
        RepairRule::literal("copyright-2x", "Ã‚Â©", "©"),
    ]);

    // --- Single-layer mojibake carrying a mangled variation selector ---
    // These must precede the generic vs-cleanup rule below.
    rules.extend([
        RepairRule::literal("sword", "âš”ï¸", "⚔️"),
        RepairRule::literal("arrow", "âž¡ï¸", "➡️"),
        RepairRule::literal("envelope", "âœ‰ï¸", "✉️"),
        RepairRule::literal("heart", "â¤ï¸", "❤️"),
        RepairRule::literal("pencil", "âœï¸", "✍️"),
    ]);

    // --- Single-layer mojibake, unambiguous forms ---
    rules.extend([
        RepairRule::literal("rocket", "ðŸš€", "🚀"),
        RepairRule::literal("fire", "ðŸ”¥", "🔥"),
        RepairRule::literal("target", "ðŸŽ¯", "🎯"),
        RepairRule::literal("bulb", "ðŸ’¡", "💡"),
        RepairRule::literal("chart", "ðŸ“ˆ", "📈"),
        RepairRule::literal("phone", "ðŸ“ž", "📞"),
        RepairRule::literal("trophy", "ðŸ†", "🏆"),
        RepairRule::literal("gem", "ðŸ’Ž", "💎"),
        RepairRule::literal("unlock", "ðŸ”“", "🔓"),
        RepairRule::literal("grad-cap", "ðŸŽ“", "🎓"),
        RepairRule::literal("person", "ðŸ‘¤", "👤"),
        RepairRule::literal("sparkles", "âœ¨", "✨"),
        RepairRule::literal("check", "âœ…", "✅"),
        RepairRule::literal("em-dash", "â€”", "—"),
    ]);

    // --- Degraded onboarding prompts (emoji collapsed to ASCII markers) ---
    // Long enough to be safely global; the phrasing pins the context.
    rules.extend([
        RepairRule::literal(
            "prompt-class",
            "What class are you in? x} ",
            "What class are you in? 📝",
        ),
        RepairRule::literal(
            "prompt-school",
            "Where do you study? x",
            "Where do you study? 🏫",
        ),
        RepairRule::literal(
            "prompt-gender",
            "How do you identify? (",
            "How do you identify? 👤",
        ),
        RepairRule::literal(
            "prompt-city",
            "Where are you from? x ",
            "Where are you from? 🌍",
        ),
        RepairRule::literal(
            "prompt-interests",
            "What excites you? <",
            "What excites you? ❤️",
        ),
        RepairRule::literal("prompt-name", "your name? Sï¸", "your name? ✍️"),
    ]);

    // --- Degraded hero/quest copy ---
    rules.extend([
        RepairRule::literal(
            "rpg-sword",
            "Real-Life RPG <",
            "Real-Life RPG ⚔️",
        ),
        RepairRule::literal(
            "rpg-rocket",
            "real-life success. <",
            "real-life success. 🚀",
        ),
        RepairRule::literal("rare-loot", "Collect Rare Loot x }", "Collect Rare Loot 💎"),
        RepairRule::literal(
            "game-of-life",
            "Win the game of life. x",
            "Win the game of life. 🏆",
        ),
        RepairRule::literal(
            "fire-streak",
            "the fire goes out! x",
            "the fire goes out! 🔥",
        ),
        RepairRule::literal("all-complete", "All Complete S ", "All Complete ✅ "),
        RepairRule::literal("unlocked", "S  Unlocked!", "🔓 Unlocked!"),
    ]);

    // --- Degraded XP toasts ---
    // The marker degenerated to one ASCII character, which could appear in
    // any amount of correct code; the toast description on the same line is
    // what makes the repair safe.
    rules.extend([
        RepairRule::literal("xp-class", "+50 XP x} ", "+50 XP 🎓").on_lines_with("Class saved"),
        RepairRule::literal("xp-school", "+50 XP x", "+50 XP 🏫").on_lines_with("School saved"),
        RepairRule::literal("xp-gender", "+25 XP (", "+25 XP 👤").on_lines_with("Gender saved"),
        RepairRule::literal("xp-city", "+25 XP x ", "+25 XP 🌍").on_lines_with("City saved"),
        RepairRule::literal("xp-interests", "+75 XP <", "+75 XP ❤️")
            .on_lines_with("Interests saved"),
    ]);

    // --- Generic cleanup ---
    // "ï¸" is cp1252 mojibake of the emoji variation selector (U+FE0F);
    // after the literal emoji rules above have run, any leftover instance
    // is a stray selector next to an already-correct character. The
    // sequence cannot plausibly occur in correct text, hence unsafe-global.
    rules.push(
        RepairRule::regex(
            "vs-cleanup",
            Regex::new("ï¸Â?").expect("vs-cleanup regex is valid"),
            "\u{FE0F}",
        )
        .allow_unsafe_global(),
    );

    // --- Path-scoped one-offs ---
    // The footer logo emoji degraded ambiguously ("ðŸ§" is equally a
    // penguin, a cupcake or a monocle face elsewhere).
    rules.extend([
        RepairRule::literal("footer-penguin", "ðŸ§", "🐧").in_paths("**/Footer.*"),
        RepairRule::literal("footer-penguin-slot", ">x</div>", ">🐧</div>")
            .in_paths("**/Footer.*"),
        RepairRule::literal("copyright", "Â©", "©").on_lines_with("All rights reserved"),
    ]);

    rules
}
