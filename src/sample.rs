use std::collections::BTreeMap;

use crate::{DescriptionOptions, GeoAudit, ProductAuditRecord, SeoAudit};

/// Built-in catalog used whenever no external payload is supplied: two
/// products from the Calvin Klein audit the report was first produced
/// for.
pub fn sample_products() -> Vec<ProductAuditRecord> {
    vec![wool_wrap_coat(), modern_cotton_bralette()]
}

fn wool_wrap_coat() -> ProductAuditRecord {
    ProductAuditRecord {
        id: "ck-001".to_string(),
        title: "Wool Blend Belted Wrap Coat".to_string(),
        url: "https://www.calvinklein.us/en/women/apparel/womens-outerwear/wool-blend-belted-wrap-coat/44D595G-PAI.html".to_string(),
        original_description: "Tailored from a warm wool blend, this coat wraps at the front and ties with a belt at the waist. A relaxed silhouette to effortlessly layer above outfits through the cold seasons. This coat is framed with notch lapels and detailed with welt pockets at the sides.".to_string(),
        seo: SeoAudit {
            strengths: entries(&[
                ("Title Tag", "The title tag \"Wool Blend Belted Wrap Coat | Calvin Klein\" is clear, keyword-rich, and within the recommended character limit (42 characters)."),
                ("H1 Heading", "A relevant <h1> heading \"Wool Blend Belted Wrap Coat\" is present and accurately describes the product."),
                ("Indexability", "The page includes <meta name=\"robots\" content=\"index,follow\">, indicating that search engines are allowed to index the page and follow its links."),
                ("Internal Linking", "The page features a comprehensive navigation menu and a \"Style With\" section, providing good internal linking to other relevant products and categories."),
            ]),
            issues: entries(&[
                ("Meta Description Length", "The meta description is 260 characters long, exceeding the recommended limit of 160 characters. This may lead to truncation in search results."),
                ("Missing Canonical Tag", "There is no <link rel=\"canonical\"> tag present on the page. This can lead to duplicate content issues if the page is accessible via multiple URLs."),
                ("Image Alt Tags", "Many images, including the main product image, have missing, generic, or non-descriptive alt text. This negatively impacts accessibility and SEO."),
            ]),
            recommendations: strings(&[
                "Shorten the meta description to under 160 characters, ensuring it remains informative and enticing.",
                "Implement a canonical tag on the page, pointing to the preferred version of the URL, to prevent duplicate content issues.",
                "Add descriptive and keyword-rich alt text to all images, especially the main product image, to improve accessibility and search engine understanding.",
            ]),
        },
        geo: GeoAudit {
            strengths: entries(&[
                ("Indexability", "The page includes <meta name=\"robots\" content=\"index,follow\">, indicating that search engine bots are allowed to crawl and index the page."),
                ("Clear Title Tag", "The title tag \"Wool Blend Belted Wrap Coat | Calvin Klein\" is descriptive and clearly states the product and brand."),
                ("Descriptive Meta Description", "The meta description provides a good summary of the product which helps AI understand the content."),
                ("Structured Product Information", "The \"About\" and \"Details\" sections provide clear, concise information with bullet points that are easily parsable by LLMs."),
                ("Brand Authority", "Calvin Klein's domain carries significant authority, positively influencing retrievability in AI search results."),
            ]),
            gaps: entries(&[
                ("Lack of Structured Data", "The page does not utilize schema.org markup (Product, Offer, or AggregateRating schema) in JSON-LD format. AI models must infer information from unstructured text."),
                ("No Q&A Section", "There isn't a dedicated Q&A or FAQ section. Pages with explicit Q&A content are more likely to be cited as sources."),
                ("Limited Unique Content", "Content is primarily product features. No styling tips, material benefits, or sustainability information that could answer broader queries."),
            ]),
            recommendations: strings(&[
                "Implement Product Schema Markup using JSON-LD to define the coat's name, description, image, brand, price, and availability.",
                "Add a \"Key Features\" section highlighting main benefits (warmth of wool blend, versatility of wrap style, comfort).",
                "Develop a FAQ section with 2-3 common questions and mark up with FAQPage schema for maximum AI visibility.",
                "Enhance product description with context about ideal use cases and target audience for better AI understanding.",
            ]),
        },
        description_options: DescriptionOptions {
            seo_prioritized: "Discover the Calvin Klein Women's Wool Blend Wrap Coat, an essential for cold seasons. This luxurious, tailored wool blend coat offers superior warmth and sophisticated style. Featuring an elegant wrap front and an adjustable belted waist, it creates a flattering, relaxed silhouette. Designed with classic notch lapels and practical welt pockets, this premium winter outerwear piece effortlessly layers over any outfit. Elevate your cold-weather wardrobe with this modern, minimalist Calvin Klein coat.".to_string(),
            geo_prioritized: "This Calvin Klein coat is a wool blend wrap style. It features a tie belt at the waist and notch lapels. The silhouette is relaxed, designed for layering. It includes side welt pockets. Ideal for cold weather, offering warmth and modern style.".to_string(),
            balanced: "Experience modern elegance with this Calvin Klein wool blend wrap coat. Tailored for a relaxed fit, it effortlessly layers over your cold-weather ensembles. This sophisticated coat features a chic wrap front with a self-tie belt at the waist, defining a flattering silhouette. Classic notch lapels and discreet welt pockets complete the minimalist design, offering both warmth and refined style for the colder seasons.".to_string(),
        },
    }
}

fn modern_cotton_bralette() -> ProductAuditRecord {
    ProductAuditRecord {
        id: "ck-002".to_string(),
        title: "Modern Cotton Bralette".to_string(),
        url: "https://www.calvinklein.us/en/women/underwear/bras/modern-cotton-bralette".to_string(),
        original_description: "Classic comfort bralette in soft cotton blend with signature elastic band.".to_string(),
        seo: SeoAudit {
            strengths: entries(&[
                ("Product Category", "Clear categorization under women's underwear/bras helps with site architecture."),
                ("Brand Recognition", "Calvin Klein brand name provides strong SEO authority."),
                ("Mobile Responsive", "Page is fully optimized for mobile devices."),
            ]),
            issues: entries(&[
                ("Short Meta Description", "Current meta description is under 100 characters, missing opportunity for keywords."),
                ("Missing Size Information", "No size range mentioned in title or early description."),
                ("Limited Content", "Product description lacks detail about materials and benefits."),
            ]),
            recommendations: strings(&[
                "Expand meta description to 150-160 characters including keywords like \"comfortable\", \"cotton blend\", \"everyday wear\".",
                "Add material composition percentage to product description.",
                "Include size range (XS-XL) in product title for better search visibility.",
            ]),
        },
        geo: GeoAudit {
            strengths: entries(&[
                ("Simple Language", "Uses clear, universally understood terms."),
                ("Visual Content", "Multiple product images from different angles aid understanding."),
                ("Brand Signal", "Strong brand recognition helps with AI retrieval."),
            ]),
            gaps: entries(&[
                ("No Structured Data", "Missing Product schema markup for AI parsing."),
                ("Limited Context", "No information about use cases or styling suggestions."),
                ("No Reviews", "Lacks customer reviews that could provide social proof for AI systems."),
            ]),
            recommendations: strings(&[
                "Add Product and Offer schema with all relevant properties.",
                "Create a \"Perfect For\" section describing ideal use cases.",
                "Include care instructions and material benefits for comprehensive content.",
            ]),
        },
        description_options: DescriptionOptions {
            seo_prioritized: "Shop the Calvin Klein Modern Cotton Bralette - the ultimate comfortable women's underwear essential. Crafted from premium cotton-modal blend (53% Cotton, 35% Modal, 12% Elastane) for all-day breathable comfort. Features the iconic Calvin Klein logo waistband and wireless design perfect for everyday wear, lounging, or light activities. Available in sizes XS-XL with removable padding. Machine washable for easy care.".to_string(),
            geo_prioritized: "Calvin Klein bralette in cotton-modal blend. Wireless design with logo elastic band. Removable padding included. Sizes XS through XL available. Machine wash cold.".to_string(),
            balanced: "Experience signature comfort with the Calvin Klein Modern Cotton Bralette. This everyday essential combines soft cotton-modal fabric with the iconic logo waistband you love. The wireless design and removable padding provide versatile comfort for any activity. Available in sizes XS-XL, machine washable for effortless care.".to_string(),
        },
    }
}

fn entries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(label, text)| (label.to_string(), text.to_string()))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
