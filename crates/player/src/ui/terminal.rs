//! Plain-text rendering of controller replies.

use std::fmt::Write;

use crate::state::BuilderPhase;
use crate::ui::character_sheet::CharacterSheetView;
use crate::ui::commands::USAGE;
use crate::ui::controller::{Panel, Reply};
use crate::ui::view_model::{BuilderView, SelectorOption};

pub fn render_reply(reply: &Reply) -> String {
    let mut out = String::new();
    for panel in &reply.panels {
        match panel {
            Panel::Builder(view) => out.push_str(&render_builder(view)),
            Panel::Sheets(sheets) => {
                for sheet in sheets {
                    out.push_str(&render_sheet(sheet));
                }
            }
            Panel::Map(map) => {
                out.push_str(map);
                out.push('\n');
            }
            Panel::Help => {
                out.push_str(USAGE);
                out.push('\n');
            }
        }
    }
    for message in &reply.messages {
        let _ = writeln!(out, "> {message}");
    }
    out
}

pub fn render_builder(view: &BuilderView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.title);

    let slots: Vec<String> = view
        .slots
        .iter()
        .map(|slot| {
            let label = slot.confirmed.as_deref().unwrap_or("(empty)");
            if slot.active {
                format!("[{}: {label}]", slot.index + 1)
            } else {
                format!(" {}: {label} ", slot.index + 1)
            }
        })
        .collect();
    let _ = writeln!(out, "{}", slots.join(" "));

    let name = if view.name.is_empty() { "-" } else { view.name.as_str() };
    let _ = writeln!(out, "Name: {name}");
    let _ = writeln!(out, "Race: {}", selector_line(&view.races));
    let _ = writeln!(out, "Class: {}", selector_line(&view.classes));

    for row in &view.abilities {
        let minus = if row.can_decrease { '-' } else { ' ' };
        let plus = if row.can_increase { '+' } else { ' ' };
        let _ = writeln!(
            out,
            "  {minus} {:<3} {:>2} ({:+}) {plus}   rolled {}",
            row.ability.as_str(),
            row.score,
            row.modifier,
            row.baseline
        );
    }
    let _ = writeln!(out, "Bonus points: {}", view.bonus_points);

    let mut controls = Vec::new();
    if view.can_go_previous {
        controls.push("prev");
    }
    if view.can_go_next {
        controls.push("next");
    }
    if view.submit_enabled {
        controls.push("submit");
    }
    if view.phase == BuilderPhase::Submitting {
        controls.push("(submitting...)");
    }
    let _ = writeln!(out, "Available: {}", controls.join(", "));
    out
}

fn selector_line<T>(options: &[SelectorOption<T>]) -> String {
    options
        .iter()
        .map(|option| match (option.selected, option.enabled) {
            (true, _) => format!("[{}]", option.label),
            (false, true) => option.label.to_string(),
            (false, false) => format!("({} n/a)", option.label),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_sheet(sheet: &CharacterSheetView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", sheet.name);
    let _ = writeln!(out, "{} {} (level {})", sheet.race, sheet.class, sheet.level);
    let _ = writeln!(
        out,
        "Experience: {}  Next Level: {}",
        sheet.experience, sheet.next_level
    );
    let _ = writeln!(out, "Money: {}", sheet.money);
    let _ = writeln!(
        out,
        "HP: {}  AC: {}  THAC0: {}",
        sheet.hit_points, sheet.armor_class, sheet.thac0
    );

    let _ = writeln!(out, "Abilities:");
    for a in &sheet.abilities {
        let _ = writeln!(
            out,
            "  {:<13} {:>2} ({})",
            a.ability.display_name(),
            a.score,
            a.modifier
        );
    }

    if !sheet.saving_throws.is_empty() {
        let saves: Vec<String> = sheet
            .saving_throws
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        let _ = writeln!(out, "Saving Throws: {}", saves.join(", "));
    }

    if !sheet.equipment.is_empty() {
        let _ = writeln!(out, "Equipment:");
        for (slot, item) in &sheet.equipment {
            let _ = writeln!(out, "  {slot}: {item}");
        }
    }

    let _ = writeln!(out, "Inventory:");
    if sheet.inventory.is_empty() {
        let _ = writeln!(out, "  No items");
    }
    for item in &sheet.inventory {
        let _ = writeln!(out, "  {item}");
    }

    for level in &sheet.spells {
        let _ = writeln!(out, "Level {} spells ({} slots):", level.level, level.slots);
        for spell in &level.spells {
            let _ = writeln!(out, "  {spell}");
        }
    }
    out
}
