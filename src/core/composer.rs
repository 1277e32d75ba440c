/// Compose the generated artifact into one embeddable preview document.
///
/// Pure and idempotent: identical inputs yield byte-identical output. The
/// `<script>` block is always present so the document structure is stable;
/// when no behavior was generated it is simply empty. The artifact's css is
/// appended verbatim after the base rule, the html verbatim into the body.
pub fn compose_preview(
    html: &str,
    css: &str,
    javascript: Option<&str>,
    font: &str,
    primary_color: &str,
) -> String {
    let javascript = javascript.unwrap_or("");
    format!(
        "<html>\n  <head>\n    <style>\n      body {{ font-family: {font}; color: {primary_color}; }}\n      {css}\n    </style>\n  </head>\n  <body>\n    {html}\n    <script>\n      {javascript}\n    </script>\n  </body>\n</html>\n"
    )
}
