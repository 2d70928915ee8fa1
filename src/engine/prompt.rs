//! Prompt construction for the recommendation call.
//!
//! The prompt embeds the brand definitions as domain knowledge, the
//! allow-list verbatim with restriction instructions, the sampled
//! texts as bullet evidence, and the exact JSON schema the engine
//! will parse.

use crate::config::BrandProfile;

/// Build the single instruction string sent to the generator.
///
/// `samples` are already truncated to the per-record budget; this
/// function only formats.
pub fn build_prompt(profiles: &[BrandProfile], allow_list: &[String], samples: &[String]) -> String {
    let brand_list = allow_list.join(", ");

    let guidelines = profiles
        .iter()
        .map(|p| format!("- {}: {} ({})", p.name, p.audience, p.categories.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    let evidence = samples
        .iter()
        .map(|text| format!("- {text}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a flavor innovation analyst for consumer health brands.

IMPORTANT: Only analyze for these specific brands: {brand_list}

Brand Guidelines:
{guidelines}

Analyze these social media comments about supplement flavors:

{evidence}

Your task:
1. Identify the top 5 most promising NEW flavor ideas - ONLY for the brands: {brand_list}
2. Identify 5 ideas to REJECT and why
3. Pick the #1 GOLDEN CANDIDATE with strongest market potential - MUST be from: {brand_list}

CRITICAL: Only recommend flavors for {brand_list}. Do not suggest flavors for brands not in this list.

For each recommendation:
- Suggest which brand it fits FROM THIS LIST ONLY: {brand_list}
- Explain WHY it works in ONE simple sentence (no technical jargon)
- Rate confidence: High/Medium/Low

Return ONLY valid JSON in this exact format:
{{
  "recommended": [
    {{
      "flavor": "Flavor Name",
      "brand": "Brand Name",
      "product_type": "Whey Protein/Gummies/Pre-workout/etc",
      "why": "Simple one-sentence explanation",
      "confidence": "High/Medium/Low",
      "user_pain_point": "What problem this solves"
    }}
  ],
  "rejected": [
    {{
      "flavor": "Flavor Name",
      "reason": "Why this won't work"
    }}
  ],
  "golden_candidate": {{
    "flavor": "Flavor Name",
    "brand": "Brand Name",
    "product_type": "Product Type",
    "why": "Compelling reason",
    "market_opportunity": "Market insight"
  }}
}}"#
    )
}
