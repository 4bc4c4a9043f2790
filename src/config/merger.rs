//! Layering of YAML configuration documents.
//!
//! # Merge Rules
//!
//! - Mappings are merged key by key, recursively
//! - Sequences and scalars in the overlay replace the base value
//! - A `null` in the overlay deletes the key from the result

use serde_yaml::Value;

/// Merge `overlay` on top of `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }
        let layered = match base_map.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), layered);
    }
    Value::Mapping(merged)
}

/// Merge documents in order; later documents win.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn project_generator_overrides_user_generator_command() {
        let user = yaml(
            r#"
generators:
  package:
    command: ~/bin/gen-package
    args: [--verbose]
"#,
        );
        let project = yaml(
            r#"
generators:
  package:
    command: ./tools/gen-package
"#,
        );

        let merged = deep_merge(&user, &project);

        assert_eq!(merged["generators"]["package"]["command"], "./tools/gen-package");
        assert_eq!(merged["generators"]["package"]["args"][0], "--verbose");
    }

    #[test]
    fn sequences_are_replaced() {
        let base = yaml("args: [a, b]");
        let overlay = yaml("args: [c]");

        let merged = deep_merge(&base, &overlay);
        let args = merged["args"].as_sequence().unwrap();

        assert_eq!(args.len(), 1);
        assert_eq!(args[0], "c");
    }

    #[test]
    fn null_removes_inherited_generator() {
        let base = yaml(
            r#"
generators:
  list: { command: gen-list }
  route: { command: gen-route }
"#,
        );
        let overlay = yaml("generators:\n  list: null\n");

        let merged = deep_merge(&base, &overlay);

        assert!(merged["generators"].get("list").is_none());
        assert_eq!(merged["generators"]["route"]["command"], "gen-route");
    }

    #[test]
    fn scalar_overlay_replaces_mapping() {
        let merged = deep_merge(&yaml("settings: { generator_prefix: a- }"), &yaml("settings: x"));
        assert_eq!(merged["settings"], "x");
    }

    #[test]
    fn merge_configs_applies_in_order() {
        let merged = merge_configs(&[
            yaml("settings: { generator_prefix: first- }"),
            yaml("settings: { default_output: quiet }"),
            yaml("settings: { generator_prefix: third- }"),
        ]);

        assert_eq!(merged["settings"]["generator_prefix"], "third-");
        assert_eq!(merged["settings"]["default_output"], "quiet");
    }

    #[test]
    fn merge_of_nothing_is_empty_mapping() {
        assert_eq!(merge_configs(&[]), Value::Mapping(Default::default()));
    }
}
