use crate::application::services::RedirectRule;
use crate::domain::Locale;

use super::escape::escape_html;

const LOADING_PLACEHOLDER: &str = concat!(
    r#"<div class="flex min-h-screen items-center justify-center" role="status" aria-live="polite">"#,
    r#"<div class="h-12 w-12 animate-spin rounded-full border-b-2 border-primary"></div>"#,
    r#"</div>"#,
);

/// Centered spinner shown while a locale-scoped page resolves.
pub fn loading_placeholder() -> &'static str {
    LOADING_PLACEHOLDER
}

/// Wraps rendered `content` in a suspense boundary that keeps `fallback_html`
/// inert for client-side navigations. Both arguments are inserted as is.
fn suspense_boundary(name: &str, fallback_html: &str, content: &str) -> String {
    format!(
        concat!(
            "<div data-suspense-boundary=\"{name}\">",
            "<template data-suspense-fallback>{fallback}</template>",
            "{content}",
            "</div>"
        ),
        name = name,
        fallback = fallback_html,
        content = content
    )
}

/// Document hosting the media processor. The processor view is mounted
/// client-side, so the boundary is served showing its fallback.
pub fn media_processor_shell(lang: &Locale, fallback_text: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"{lang}\">\n",
            "<head><meta charset=\"utf-8\"><title>Media Processor</title></head>\n",
            "<body>\n",
            "<main id=\"media-processor-root\" data-view=\"MediaProcessorView\">\n",
            "<div data-suspense-boundary=\"media-processor\">",
            "<p data-suspense-fallback>{fallback}</p>",
            "</div>\n",
            "</main>\n",
            "</body>\n",
            "</html>\n"
        ),
        lang = escape_html(lang.as_str()),
        fallback = escape_html(fallback_text)
    )
}

/// Locale pages share the loading placeholder as their suspense fallback.
pub fn type_safety_test_page(locale: &Locale, rules: &[RedirectRule]) -> String {
    let rows: String = rules
        .iter()
        .map(|rule| {
            format!(
                "<tr><td><code>{}</code></td><td><code>{}</code></td></tr>\n",
                escape_html(&rule.source),
                escape_html(&rule.target.to_string())
            )
        })
        .collect();

    let locale = escape_html(locale.as_str());

    let content = format!(
        concat!(
            "<main data-view=\"TypeSafetyTest\">\n",
            "<h1>Type Safety Test</h1>\n",
            "<p>Active locale: <code>{locale}</code></p>\n",
            "<table>\n",
            "<thead><tr><th>Source</th><th>Redirect target</th></tr></thead>\n",
            "<tbody>\n{rows}</tbody>\n",
            "</table>\n",
            "</main>"
        ),
        locale = locale,
        rows = rows
    );

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"{locale}\">\n",
            "<head><meta charset=\"utf-8\"><title>Type Safety Test</title></head>\n",
            "<body>\n",
            "{boundary}\n",
            "</body>\n",
            "</html>\n"
        ),
        locale = locale,
        boundary = suspense_boundary("locale", LOADING_PLACEHOLDER, &content)
    )
}
