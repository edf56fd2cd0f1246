use std::path::PathBuf;

use serde::Deserialize;

/// Platform name the hook generates files for.
pub const IOS_PLATFORM: &str = "ios";

/// The context object the packaging tool hands the hook on stdin.
///
/// Field names match the camelCase JSON the tool sends.
/// Unknown fields are silently ignored for forward compatibility.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookContext {
    /// Lifecycle event name, e.g. `after_prepare`.
    #[serde(default)]
    pub hook: Option<String>,
    pub opts: HookOpts,
}

/// Options section of the hook context.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOpts {
    pub project_root: PathBuf,
    /// Platforms the current build targets. Empty means "all".
    #[serde(default)]
    pub platforms: Vec<String>,
}

impl HookContext {
    /// Whether this build includes the iOS platform.
    pub fn targets_ios(&self) -> bool {
        self.opts.platforms.is_empty()
            || self
                .opts
                .platforms
                .iter()
                .any(|p| p.eq_ignore_ascii_case(IOS_PLATFORM))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_context_json() -> serde_json::Value {
        json!({
            "hook": "after_prepare",
            "opts": {
                "projectRoot": "/home/user/app",
                "platforms": ["ios"]
            }
        })
    }

    #[test]
    fn parse_minimal_context() {
        let ctx: HookContext =
            serde_json::from_value(minimal_context_json()).expect("should parse valid context");

        assert_eq!(ctx.hook.as_deref(), Some("after_prepare"));
        assert_eq!(ctx.opts.project_root, PathBuf::from("/home/user/app"));
        assert_eq!(ctx.opts.platforms, vec!["ios"]);
        assert!(ctx.targets_ios());
    }

    #[test]
    fn hook_and_platforms_are_optional() {
        let ctx: HookContext = serde_json::from_value(json!({
            "opts": {"projectRoot": "/p"}
        }))
        .expect("should parse without hook or platforms");

        assert!(ctx.hook.is_none());
        assert!(ctx.opts.platforms.is_empty());
        assert!(ctx.targets_ios());
    }

    #[test]
    fn other_platforms_do_not_target_ios() {
        let mut value = minimal_context_json();
        value["opts"]["platforms"] = json!(["android", "browser"]);
        let ctx: HookContext = serde_json::from_value(value).unwrap();
        assert!(!ctx.targets_ios());
    }

    #[test]
    fn mixed_platforms_target_ios() {
        let mut value = minimal_context_json();
        value["opts"]["platforms"] = json!(["android", "iOS"]);
        let ctx: HookContext = serde_json::from_value(value).unwrap();
        assert!(ctx.targets_ios());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut value = minimal_context_json();
        value["cmdLine"] = json!("cordova prepare ios");
        value["opts"]["options"] = json!({"release": true});

        let ctx: HookContext =
            serde_json::from_value(value).expect("unknown fields should not cause failure");
        assert_eq!(ctx.opts.project_root, PathBuf::from("/home/user/app"));
    }

    #[test]
    fn missing_project_root_is_an_error() {
        let result: Result<HookContext, _> =
            serde_json::from_value(json!({"opts": {"platforms": ["ios"]}}));
        assert!(result.is_err());
    }
}
