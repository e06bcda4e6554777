//! Schematic kinds and generator command composition
//!
//! Commands are composed as plain strings, exactly as a user would type
//! them, and later handed to the shell verbatim. Only the project name
//! is quoted; everything else is passed through untouched.

use serde::{Deserialize, Serialize};

/// Artifact kinds the generator knows how to scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchematicKind {
    Component,
    Module,
    Service,
    Directive,
    Pipe,
}

impl SchematicKind {
    /// Short code understood by `ng g`
    pub fn code(&self) -> &'static str {
        match self {
            Self::Component => "c",
            Self::Module => "m",
            Self::Service => "s",
            Self::Directive => "d",
            Self::Pipe => "p",
        }
    }

    /// Display name used in prompts and confirmations
    pub fn name(&self) -> &'static str {
        match self {
            Self::Component => "Component",
            Self::Module => "Module",
            Self::Service => "Service",
            Self::Directive => "Directive",
            Self::Pipe => "Pipe",
        }
    }
}

impl std::fmt::Display for SchematicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Change-detection strategies accepted by `ng g c`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeDetection {
    Default,
    OnPush,
}

impl std::fmt::Display for ChangeDetection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Default => "Default",
            Self::OnPush => "OnPush",
        };
        write!(f, "{}", value)
    }
}

/// Stylesheet languages accepted by `ng g c`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleLanguage {
    Css,
    Scss,
    Sass,
    Less,
    Styl,
}

impl std::fmt::Display for StyleLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Sass => "sass",
            Self::Less => "less",
            Self::Styl => "styl",
        };
        write!(f, "{}", value)
    }
}

/// View-encapsulation modes accepted by `ng g c`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEncapsulation {
    Emulated,
    Native,
    None,
    ShadowDom,
}

impl std::fmt::Display for ViewEncapsulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Emulated => "Emulated",
            Self::Native => "Native",
            Self::None => "None",
            Self::ShadowDom => "ShadowDom",
        };
        write!(f, "{}", value)
    }
}

/// Component generation flags
///
/// Mirrors the recognized settings keys. Only set, truthy values render
/// into the command line, in this fixed field order; `false` booleans
/// and empty strings are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ComponentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_detection: Option<ChangeDetection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_template: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_style: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleLanguage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_encapsulation: Option<ViewEncapsulation>,
}

impl ComponentOptions {
    /// Render the configured flags as `--name=value` tokens.
    pub fn to_flags(&self) -> Vec<String> {
        let mut flags = Vec::new();
        if let Some(value) = self.change_detection {
            flags.push(format!("--change-detection={}", value));
        }
        if self.display_block == Some(true) {
            flags.push("--display-block=true".to_string());
        }
        if self.inline_template == Some(true) {
            flags.push("--inline-template=true".to_string());
        }
        if self.inline_style == Some(true) {
            flags.push("--inline-style=true".to_string());
        }
        if let Some(prefix) = self.prefix.as_deref().filter(|p| !p.is_empty()) {
            flags.push(format!("--prefix={}", prefix));
        }
        if let Some(value) = self.style {
            flags.push(format!("--style={}", value));
        }
        if let Some(value) = self.view_encapsulation {
            flags.push(format!("--view-encapsulation={}", value));
        }
        flags
    }
}

/// A fully resolved generator invocation
///
/// An empty `project` means the manifest's default project; the
/// `--project` flag is then omitted.
#[derive(Debug, Clone)]
pub struct GeneratorCommand {
    pub kind: SchematicKind,
    /// Command path joined with the artifact name
    pub target: String,
    pub project: String,
    /// Only meaningful for modules
    pub routing: bool,
    /// Only rendered for components
    pub options: ComponentOptions,
}

impl GeneratorCommand {
    /// Compose the shell command for this invocation.
    ///
    /// Tokens are joined with single spaces; no token is ever empty, so
    /// the result carries no doubled or trailing whitespace.
    pub fn compose(&self) -> String {
        let mut parts: Vec<String> = vec!["ng".into(), "g".into(), self.kind.code().into()];

        // Modules place the routing flag before the target path
        if self.kind == SchematicKind::Module && self.routing {
            parts.push("--routing=\"true\"".into());
        }

        parts.push(self.target.clone());

        if !self.project.is_empty() {
            parts.push(format!("--project=\"{}\"", self.project));
        }

        if self.kind == SchematicKind::Component {
            parts.extend(self.options.to_flags());
        }

        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(kind: SchematicKind, target: &str, project: &str) -> GeneratorCommand {
        GeneratorCommand {
            kind,
            target: target.to_string(),
            project: project.to_string(),
            routing: false,
            options: ComponentOptions::default(),
        }
    }

    #[test]
    fn test_component_minimal() {
        let cmd = command(SchematicKind::Component, "features/login", "");
        assert_eq!(cmd.compose(), "ng g c features/login");
    }

    #[test]
    fn test_component_with_project() {
        let cmd = command(SchematicKind::Component, "features/login", "demo");
        assert_eq!(cmd.compose(), "ng g c features/login --project=\"demo\"");
    }

    #[test]
    fn test_component_with_all_options_in_order() {
        let mut cmd = command(SchematicKind::Component, "shared/button", "ui");
        cmd.options = ComponentOptions {
            change_detection: Some(ChangeDetection::OnPush),
            display_block: Some(true),
            inline_template: Some(true),
            inline_style: Some(true),
            prefix: Some("app".to_string()),
            style: Some(StyleLanguage::Scss),
            view_encapsulation: Some(ViewEncapsulation::ShadowDom),
        };
        assert_eq!(
            cmd.compose(),
            "ng g c shared/button --project=\"ui\" \
             --change-detection=OnPush --display-block=true --inline-template=true \
             --inline-style=true --prefix=app --style=scss --view-encapsulation=ShadowDom"
        );
    }

    #[test]
    fn test_component_falsy_options_omitted() {
        let mut cmd = command(SchematicKind::Component, "x", "");
        cmd.options = ComponentOptions {
            display_block: Some(false),
            inline_template: Some(false),
            prefix: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(cmd.compose(), "ng g c x");
    }

    #[test]
    fn test_component_default_change_detection_is_rendered() {
        let mut cmd = command(SchematicKind::Component, "x", "");
        cmd.options.change_detection = Some(ChangeDetection::Default);
        assert_eq!(cmd.compose(), "ng g c x --change-detection=Default");
    }

    #[test]
    fn test_module_routing_precedes_target() {
        let mut cmd = command(SchematicKind::Module, "features/admin", "site");
        cmd.routing = true;
        assert_eq!(
            cmd.compose(),
            "ng g m --routing=\"true\" features/admin --project=\"site\""
        );
    }

    #[test]
    fn test_module_without_routing_has_no_flag() {
        let cmd = command(SchematicKind::Module, "features/admin", "site");
        let composed = cmd.compose();
        assert_eq!(composed, "ng g m features/admin --project=\"site\"");
        assert!(!composed.contains("routing"));
    }

    #[test]
    fn test_options_ignored_for_non_components() {
        let mut cmd = command(SchematicKind::Service, "data", "");
        cmd.options.style = Some(StyleLanguage::Scss);
        assert_eq!(cmd.compose(), "ng g s data");
    }

    #[test]
    fn test_simple_kind_codes() {
        assert_eq!(command(SchematicKind::Service, "data", "").compose(), "ng g s data");
        assert_eq!(command(SchematicKind::Directive, "focus", "").compose(), "ng g d focus");
        assert_eq!(command(SchematicKind::Pipe, "currency", "").compose(), "ng g p currency");
    }

    #[test]
    fn test_no_doubled_or_trailing_whitespace() {
        let mut cmd = command(SchematicKind::Component, "x", "demo");
        cmd.options.style = Some(StyleLanguage::Css);
        let composed = cmd.compose();
        assert!(!composed.contains("  "));
        assert_eq!(composed, composed.trim());
    }

    #[test]
    fn test_options_deserialize_from_kebab_case() {
        let yaml = r#"
change-detection: OnPush
display-block: true
style: scss
view-encapsulation: ShadowDom
"#;
        let options: ComponentOptions = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(options.change_detection, Some(ChangeDetection::OnPush));
        assert_eq!(options.display_block, Some(true));
        assert_eq!(options.style, Some(StyleLanguage::Scss));
        assert_eq!(options.view_encapsulation, Some(ViewEncapsulation::ShadowDom));
        assert!(options.inline_template.is_none());
    }
}
