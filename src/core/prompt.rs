use crate::domain::model::DisplayBrief;

/// Output contract shared by both instruction templates. Providers that wrap
/// the object in a markdown fence are still accepted at parse time.
const JSON_OUTPUT_RULES: &str = "Respond with a single JSON object and nothing else. \
Do not add commentary before or after the object. \
Do not wrap the object in markdown code fences.";

const DISPLAY_INSTRUCTION_HEADER: &str = "\
You are an expert frontend developer tasked with creating UI components.

Goal: Generate HTML, CSS, and JavaScript code for a visually stunning and modern product display section.

Instructions:
1. Use modern CSS techniques like Flexbox and Grid.
2. Build the color scheme from the provided primary and secondary brand colors.
3. Use the provided font throughout for a consistent look.
4. Add subtle animations, transitions, and gradients where they improve the result.
5. Ensure the layout is responsive and adapts to different screen sizes.
6. Include JavaScript for interactive elements such as carousel behavior and hover effects.
7. Display every carousel image and every product exactly as provided, in the given order.
";

const REFINE_INSTRUCTION_HEADER: &str = "\
You are an expert UI/UX designer. Your task is to refine a user's text prompt for generating \
HTML and CSS code for a product display section.

Consider common design patterns and suggest improvements to the prompt that raise the quality, \
responsiveness, and modernity of the generated code.
";

/// Serialize a brief into the fixed generation instruction. Products and
/// carousel images are enumerated one line per field, in input order, with no
/// reordering or deduplication, so the provider sees unambiguous structure.
pub fn render_display_instruction(brief: &DisplayBrief) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(DISPLAY_INSTRUCTION_HEADER);

    out.push_str("\nInputs:\n1. Carousel Images:\n");
    for (index, image) in brief.carousel_images.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, image));
    }

    out.push_str("2. Product Details:\n");
    for product in &brief.products {
        out.push_str(&format!("  - Title: {}\n", product.title));
        out.push_str(&format!("    Price: {}\n", product.price));
        out.push_str(&format!("    Description: {}\n", product.description));
        out.push_str(&format!("    Image: {}\n", product.image));
    }

    out.push_str("3. Brand Guidelines:\n");
    out.push_str(&format!("   - Primary Color: {}\n", brief.primary_color));
    out.push_str(&format!("   - Secondary Color: {}\n", brief.secondary_color));
    out.push_str(&format!("   - Primary Font: '{}'\n", brief.font));
    out.push_str(&format!("4. Description: {}\n", brief.intent_text));

    out.push_str(
        "\nOutput: a JSON object with a required \"html\" field (the markup), a required \
\"css\" field (the styles, including any animations or gradients), and an optional \
\"javascript\" field (interactive behavior). ",
    );
    out.push_str(JSON_OUTPUT_RULES);
    out.push('\n');
    out
}

/// Serialize one free-text prompt into the fixed refinement instruction.
pub fn render_refine_instruction(prompt: &str) -> String {
    let mut out = String::with_capacity(REFINE_INSTRUCTION_HEADER.len() + prompt.len() + 256);
    out.push_str(REFINE_INSTRUCTION_HEADER);
    out.push_str("\nOriginal Prompt: ");
    out.push_str(prompt);
    out.push_str(
        "\n\nOutput: a JSON object with a single \"refinedPrompt\" field containing the \
improved prompt. ",
    );
    out.push_str(JSON_OUTPUT_RULES);
    out.push('\n');
    out
}
