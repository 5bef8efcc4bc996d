//! Bijection between wire maps and flat entity lists.
//!
//! The device groups bindings by keyword (`{keyword: [payload, ...]}`);
//! the UI edits a flat list of entities. Conversions here preserve the
//! externally meaningful fields in both directions -- ids are
//! regenerated on every reshape and are never round-tripped.

use std::collections::BTreeMap;

use fridayctl_api::LightUpdate;

use crate::model::{Command, DAction, Vendor};

// ── Hue light commands ──────────────────────────────────────────────

/// Group hue actions by keyword into the device's wire shape.
///
/// Actions for other vendors are skipped; per-keyword command order
/// follows the order of the input slice.
pub fn actions_to_light_commands(actions: &[DAction]) -> BTreeMap<String, Vec<LightUpdate>> {
    let mut wire: BTreeMap<String, Vec<LightUpdate>> = BTreeMap::new();
    for action in actions {
        if action.vendor() == Vendor::HueLights {
            wire.entry(action.keyword().to_owned())
                .or_default()
                .push(action.command().clone());
        }
    }
    wire
}

/// Flatten the device's grouped wire map into one action per command.
///
/// Every action gets a fresh generated id.
pub fn light_commands_to_actions(wire: &BTreeMap<String, Vec<LightUpdate>>) -> Vec<DAction> {
    wire.iter()
        .flat_map(|(keyword, commands)| {
            commands
                .iter()
                .map(|command| DAction::new(keyword.clone(), Vendor::HueLights, command.clone()))
        })
        .collect()
}

// ── Script bindings ─────────────────────────────────────────────────

/// Reshape the `bound` scripts map into `Command` view entities.
pub fn commands_from_bound(bound: &BTreeMap<String, Vec<String>>) -> Vec<Command> {
    bound
        .iter()
        .map(|(keyword, scripts)| Command::new(keyword.clone(), scripts.clone()))
        .collect()
}

/// Project `Command` entities back into the `bound` wire map.
///
/// Two commands with the same keyword merge, keeping input order.
pub fn bound_from_commands(commands: &[Command]) -> BTreeMap<String, Vec<String>> {
    let mut bound: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for command in commands {
        bound
            .entry(command.keyword().to_owned())
            .or_default()
            .extend(command.scripts().iter().cloned());
    }
    bound
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_wire() -> BTreeMap<String, Vec<LightUpdate>> {
        BTreeMap::from([
            (
                "lights on".to_owned(),
                vec![LightUpdate::power("1", true), LightUpdate::power("2", true)],
            ),
            ("lights off".to_owned(), vec![LightUpdate::power("1", false)]),
        ])
    }

    #[test]
    fn roundtrip_preserves_keyword_vendor_command_triples() {
        let wire = sample_wire();
        let actions = light_commands_to_actions(&wire);
        assert_eq!(actions.len(), 3);

        let back = actions_to_light_commands(&actions);
        assert_eq!(back, wire);
    }

    #[test]
    fn reshaping_regenerates_ids() {
        let wire = sample_wire();
        let first = light_commands_to_actions(&wire);
        let second = light_commands_to_actions(&wire);

        for (a, b) in first.iter().zip(&second) {
            assert_ne!(a.id(), b.id());
            assert_eq!(a.keyword(), b.keyword());
            assert_eq!(a.command(), b.command());
        }
    }

    #[test]
    fn grouping_keeps_per_keyword_order() {
        let actions = vec![
            DAction::new("party", Vendor::HueLights, LightUpdate::power("2", true)),
            DAction::new("party", Vendor::HueLights, LightUpdate::power("1", true)),
        ];
        let wire = actions_to_light_commands(&actions);
        assert_eq!(
            wire["party"],
            vec![LightUpdate::power("2", true), LightUpdate::power("1", true)]
        );
    }

    #[test]
    fn bound_map_roundtrip() {
        let bound = BTreeMap::from([
            (
                "hello".to_owned(),
                vec!["what.py".to_owned(), "who.py".to_owned()],
            ),
            ("when".to_owned(), vec!["where.sh".to_owned()]),
        ]);

        let commands = commands_from_bound(&bound);
        assert_eq!(commands.len(), 2);
        assert_eq!(bound_from_commands(&commands), bound);
    }

    #[test]
    fn duplicate_command_keywords_merge() {
        let commands = vec![
            Command::new("hello", vec!["a.py".to_owned()]),
            Command::new("hello", vec!["b.py".to_owned()]),
        ];
        let bound = bound_from_commands(&commands);
        assert_eq!(bound["hello"], vec!["a.py", "b.py"]);
    }
}
