use emoji_transcoder::{get_info, is_supported, list_supported, transform, transform_text, Format};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🎉 Emoji Transcoder Demo\n");

    // Single values
    println!("🔁 Basic transformations:");
    println!("├─ smile -> {}", transform("smile", Format::Emoji)?);
    println!("├─ 😄 -> {}", transform("😄", Format::Shortcode)?);
    println!("├─ heart -> {}", transform("heart", Format::Html)?);
    println!("└─ 🔥 -> {}\n", transform("🔥", Format::Unicode)?);

    // Running text with mixed formats
    println!("📝 Text processing:");
    let text = "Hello 😊 I'm :heart: coding! &#x1f525;";
    let shortcodes = transform_text(text, Format::Shortcode);
    println!("├─ Original: {}", text);
    println!("├─ Shortcodes: {}", shortcodes);
    println!("└─ Back to emoji: {}\n", transform_text(&shortcodes, Format::Emoji));

    // Full records
    println!("🔎 Emoji information:");
    for input in ["rocket", "😊", ":coffee:", "&#x1f308;"] {
        match get_info(input) {
            Ok(info) => println!("{}\n", info),
            Err(e) => println!("{}: {}\n", input, e),
        }
    }

    // Validation
    println!("✅ Emoji validation:");
    for input in ["smile", "invalid_emoji", "heart", "❤️", ":nonexistent:", "🚀"] {
        if is_supported(input) {
            println!("├─ ✓ {} -> {}", input, transform(input, Format::Emoji)?);
        } else {
            println!("├─ ✗ {} (not supported)", input);
        }
    }
    println!("└─ Total supported emoji: {}\n", list_supported().len());

    // Web content
    println!("🌍 HTML-safe content:");
    let content = "Welcome to our site! 😊 We hope you enjoy your stay! ⭐";
    println!("├─ Original: {}", content);
    println!("├─ HTML: {}", transform_text(content, Format::Html));
    println!("└─ Markdown: {}\n", transform_text(content, Format::Shortcode));

    // Round trips through the shortcode form
    println!("🔄 Round-trip conversions:");
    for name in ["heart", "fire", "rocket", "coffee", "pizza"] {
        let emoji = transform(name, Format::Emoji)?;
        let shortcode = transform(&emoji, Format::Shortcode)?;
        let back = transform(&shortcode, Format::Emoji)?;
        assert_eq!(emoji, back);
        println!("├─ {}: {} -> {} -> {}", name, emoji, shortcode, back);
    }

    println!("\n🎉 Demo completed successfully!");

    Ok(())
}
