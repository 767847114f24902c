//! Fixed presentation shell around the generated care plan HTML.
//!
//! The model's output is treated as an opaque fragment — never parsed or
//! sanitized — and embedded verbatim in a styled container that renders
//! well on screen and in print.

const SHELL_OPEN: &str = r#"<div class="care-plan-container" style="font-family: 'Segoe UI', system-ui, sans-serif; max-width: 900px; margin: 0 auto; padding: 20px; color: #1a1a1a;">
    <style>
        @media print {
            .care-plan-container {
                max-width: 100%;
                padding: 10px;
            }
            button {
                display: none !important;
            }
        }
        .care-plan-container h1 {
            color: #2563eb;
            border-bottom: 3px solid #2563eb;
            padding-bottom: 10px;
            margin-bottom: 20px;
        }
        .care-plan-container h2 {
            color: #1e40af;
            margin-top: 25px;
            margin-bottom: 15px;
        }
        .care-plan-container h3 {
            color: #1e3a8a;
            margin-top: 20px;
            margin-bottom: 10px;
        }
        .care-plan-container ul, .care-plan-container ol {
            line-height: 1.8;
            margin: 10px 0;
        }
        .care-plan-container li {
            margin-bottom: 8px;
        }
        .care-plan-container strong {
            color: #1e40af;
        }
    </style>
"#;

const SHELL_CLOSE: &str = "</div>";

/// Wrap a generated HTML fragment in the presentation shell.
pub fn wrap_care_plan_html(fragment: &str) -> String {
    format!("{SHELL_OPEN}    {fragment}\n{SHELL_CLOSE}")
}
