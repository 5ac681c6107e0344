use crate::config::{ColorMode, Config, Verbosity};
use crate::presentation::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::IconSet;

/// Output decisions shared by every command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbosity: config.output.verbosity.bumped(verbose),
            caps,
            color: color && !json,
            unicode,
        }
    }

    pub fn icons(&self) -> IconSet {
        IconSet::new(self.unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci: true,
            width: 120,
            height: 40,
        }
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let config = Config::default();
        let ui = UiContext::from_caps(false, 0, None, &config, ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn ci_allows_explicit_color_always_flag() {
        let config = Config::default();
        let ui = UiContext::from_caps(false, 0, Some(ColorWhen::Always), &config, ci_caps());
        assert!(ui.color);
    }

    #[test]
    fn json_output_is_never_colored() {
        let config = Config::default();
        let ui = UiContext::from_caps(true, 0, Some(ColorWhen::Always), &config, ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn config_can_disable_unicode() {
        let mut config = Config::default();
        config.output.unicode = false;
        let ui = UiContext::from_caps(false, 0, None, &config, ci_caps());
        assert!(!ui.unicode);
        assert_eq!(ui.icons().selected, "[x]");
    }

    #[test]
    fn verbose_flags_raise_configured_level() {
        let config = Config::default();
        let ui = UiContext::from_caps(false, 2, None, &config, ci_caps());
        assert_eq!(ui.verbosity, Verbosity::Debug);
    }
}
