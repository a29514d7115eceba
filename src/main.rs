//! Portfolio Page Runtime - demo session
//!
//! Runs one scripted page view against a real site: resolves the profile
//! image over HTTP, replays a scroll/menu sequence, optionally submits a
//! sample contact form, then prints the final page state.

use portfolio_page::{
    chrome, ContactFormFields, FormSubmitter, HttpFormTransport, HttpImageProbe, ImageResolver,
    NotificationCenter, PageConfig, PageModel, SectionAnchor,
};

use eyre::Result;
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    println!("📄 Portfolio Page Runtime v{}", env!("CARGO_PKG_VERSION"));
    println!();

    if std::env::var("PORTFOLIO_SITE_ORIGIN").is_err() {
        eprintln!("⚠️  PORTFOLIO_SITE_ORIGIN not set, probing against http://localhost:8080");
    }
    let submit_enabled = std::env::var("PORTFOLIO_FORM_URL").is_ok();
    if !submit_enabled {
        eprintln!("⚠️  PORTFOLIO_FORM_URL not set, the submission step will be skipped");
    }

    let config = PageConfig::default();

    // One page view
    let page = PageModel::new(vec![
        SectionAnchor::new("about", 400),
        SectionAnchor::new("skills", 900),
        SectionAnchor::new("contact", 1600),
    ])
    .into_shared();
    let notifier = NotificationCenter::with_ttl(page.clone(), config.notification_ttl);

    // Resolve the profile image over HTTP
    let probe = HttpImageProbe::with_timeout(config.site_origin.as_str(), config.request_timeout)?;
    let resolver = ImageResolver::new(probe, config.image_candidates.clone())
        .with_delay(config.resolve_delay);
    let state = resolver.resolve(&page).await;
    println!("🖼️  Image resolution: {:?}", state);

    // Scripted chrome replay: scroll down through the sections, open and
    // close the menu, mark the hero image lazily loaded
    let mut throttle = chrome::Throttle::new(chrome::SCROLL_THROTTLE);
    for scroll_y in [0, 120, 480, 1000, 1700] {
        if throttle.allow(Instant::now()) {
            if let Ok(mut page) = page.write() {
                chrome::on_scroll(&mut page, scroll_y);
            }
        }
        tokio::time::sleep(chrome::SCROLL_THROTTLE).await;
    }
    if let Ok(mut page) = page.write() {
        chrome::toggle_menu(&mut page);
        chrome::handle_key(&mut page, "Escape");
        chrome::mark_lazy_loaded(&mut page, "hero-img");
    }

    // Submit a sample contact form only when an endpoint was configured
    if submit_enabled {
        if let Ok(mut page) = page.write() {
            page.set_contact_fields(&ContactFormFields::new(
                "Demo Visitor",
                "visitor@example.com",
                "Hello from the demo session.",
            ));
        }
        let transport = HttpFormTransport::with_timeout(config.request_timeout)?;
        let mut submitter = FormSubmitter::new(transport, config.form_endpoint.clone());
        let outcome = submitter.submit(&page, &notifier).await;
        println!("📮 Form submission: {:?}", outcome);
    }

    // Final page state
    if let Ok(page) = page.read() {
        println!();
        println!("📊 Final page state:");
        println!("{}", serde_json::to_string_pretty(&*page)?);
    }

    Ok(())
}
