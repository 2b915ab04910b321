//! Prompt composition for the copy generation calls.

use std::fmt::Write;

use copyforge_core::brand::BrandProfile;
use copyforge_core::context::FlowContext;
use copyforge_core::flow::GeneratedEmail;
use copyforge_core::strategy::EmailStrategy;

use crate::generation::CampaignBrief;

/// System prompt shared by every generation call.
pub const SYSTEM_PROMPT: &str = r#"You are a senior email marketing copywriter at a creative agency. You write conversion-focused, on-brand email copy for e-commerce clients. You never invent product names, prices, ingredients, certifications, awards or statistics that are not given to you. You answer with a single JSON object and nothing else."#;

/// Block types the model may use, with a one-line description each.
const BLOCK_CATALOGUE: &str = r#"- "header": main headline
- "subheader": supporting headline
- "body": paragraph copy
- "pic": image placeholder; "content" describes the image to use
- "cta": call-to-action button; "content" is the button label, optional "link"
- "product": single product feature; optional "description", "cta", "link"
- "collection": group of products; "content" is the section title, "products" is a list of {"name", "description", "cta", "link"}"#;

const OUTPUT_FORMAT: &str = r#"Respond with JSON only, no markdown, in exactly this shape:
{
  "subject_lines": ["3 distinct subject line options"],
  "preview_text": ["3 distinct preview text options"],
  "email_blocks": [{"type": "header", "content": "..."}]
}"#;

fn push_optional(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
        let _ = writeln!(out, "- {label}: {v}");
    }
}

fn push_brand(out: &mut String, brand: &BrandProfile) {
    out.push_str("BRAND\n");
    let _ = writeln!(out, "- Name: {}", brand.display_name());
    push_optional(out, "Website", brand.website.as_deref());
    push_optional(out, "Industry", brand.industry.as_deref());
    push_optional(out, "Brand voice", brand.brand_voice.as_deref());
    push_optional(out, "Target audience", brand.target_audience.as_deref());
    push_optional(out, "Key products", brand.key_products.as_deref());
    push_optional(out, "Account notes", brand.notes.as_deref());
    out.push('\n');
}

fn push_insights(out: &mut String, insights: &[String]) {
    if insights.is_empty() {
        return;
    }
    out.push_str("STRATEGIC INSIGHTS FROM THE BRAND WEBSITE\n");
    for insight in insights {
        let _ = writeln!(out, "- {insight}");
    }
    out.push('\n');
}

fn push_rules(out: &mut String) {
    out.push_str("RULES\n");
    out.push_str("- Only mention products, claims and facts listed above; use generic wording otherwise.\n");
    out.push_str("- Match the brand voice.\n");
    out.push_str("- Use 4 to 8 blocks and end with a \"cta\" block.\n\n");
    out.push_str("ALLOWED BLOCK TYPES\n");
    out.push_str(BLOCK_CATALOGUE);
    out.push_str("\n\n");
    out.push_str(OUTPUT_FORMAT);
}

/// Prompt for one email of a flow.
pub fn flow_email_prompt(
    entry: &EmailStrategy,
    context: &FlowContext,
    brand: &BrandProfile,
    offer: &str,
    insights: &[String],
) -> String {
    let mut out = String::with_capacity(4096);

    let _ = writeln!(
        out,
        "Write email {} of {} in a {} flow.\n",
        context.current_email_number,
        context.total_emails,
        context.flow_type.label()
    );

    push_brand(&mut out, brand);

    out.push_str("THIS EMAIL\n");
    let _ = writeln!(out, "- Send day: {}", entry.day);
    let _ = writeln!(out, "- Theme: {}", entry.theme);
    let _ = writeln!(out, "- Focus: {}", entry.focus);
    let _ = writeln!(out, "- Key message: {}", entry.key_message);
    push_optional(&mut out, "Products to feature", Some(&entry.products));
    if entry.has_offer {
        let _ = writeln!(out, "- Offer to include: {offer}");
        push_optional(&mut out, "Offer angle", entry.offer_type.as_deref());
    } else {
        out.push_str("- Do not mention any discount or offer in this email.\n");
    }
    out.push('\n');

    push_insights(&mut out, insights);

    out.push_str("DIFFERENTIATION\n");
    let _ = writeln!(
        out,
        "This email's unique focus is: {}. Build the whole email around it.",
        context.unique_focus
    );
    if !context.other_emails.is_empty() {
        let _ = writeln!(
            out,
            "The other emails in this flow are:\n{}",
            context.other_emails
        );
    }
    if !context.previous_emails.is_empty() {
        let _ = writeln!(
            out,
            "Already covered earlier, do not repeat: {}",
            context.previous_emails
        );
    }
    if !context.upcoming_emails.is_empty() {
        let _ = writeln!(
            out,
            "Will be covered later, do not preempt: {}",
            context.upcoming_emails
        );
    }
    out.push('\n');

    push_rules(&mut out);
    out
}

/// Prompt for a standalone campaign email.
pub fn campaign_prompt(brief: &CampaignBrief, brand: &BrandProfile, insights: &[String]) -> String {
    let mut out = String::with_capacity(3072);
    out.push_str("Write a single marketing email for the campaign below.\n\n");

    push_brand(&mut out, brand);

    out.push_str("CAMPAIGN\n");
    let _ = writeln!(out, "- Name: {}", brief.name);
    push_optional(&mut out, "Type", brief.campaign_type.as_deref());
    push_optional(&mut out, "Send date", brief.send_date.as_deref());
    match brief.offer.as_deref().map(str::trim).filter(|o| !o.is_empty()) {
        Some(offer) => {
            let _ = writeln!(out, "- Offer to include: {offer}");
        }
        None => out.push_str("- No offer: do not invent a discount.\n"),
    }
    push_optional(&mut out, "Details", brief.details.as_deref());
    out.push('\n');

    push_insights(&mut out, insights);
    push_rules(&mut out);
    out
}

/// Prompt to rewrite one email of an existing flow.
pub fn revision_prompt(
    email: &GeneratedEmail,
    context: &FlowContext,
    brand: &BrandProfile,
    offer: &str,
    insights: &[String],
    feedback: Option<&str>,
) -> String {
    let mut out = flow_email_prompt(&email.strategy, context, brand, offer, insights);

    out.push_str("\n\nPREVIOUS DRAFT\n");
    // Serializing a CopyData cannot fail.
    let previous = serde_json::to_string_pretty(&email.copy_data).unwrap_or_default();
    out.push_str(&previous);
    out.push_str("\n\n");
    match feedback.map(str::trim).filter(|f| !f.is_empty()) {
        Some(f) => {
            let _ = writeln!(out, "Rewrite the draft applying this feedback: {f}");
        }
        None => out.push_str("Write a fresh alternative that keeps the same plan.\n"),
    }
    out
}
