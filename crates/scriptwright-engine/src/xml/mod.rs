//! # Document serialization
//!
//! Turns a classified [`Script`] into a Final Draft-style XML document.
//!
//! The skeleton is a compatibility contract with external screenwriting
//! tools; element names, attributes, and nesting order are fixed:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8" standalone="no"?>
//! <FinalDraft DocumentType="Script" Template="No" Version="1">
//!   <Content>
//!     <Paragraph Type="Scene Heading"><Text>FADE IN:</Text></Paragraph>
//!     <!-- one Paragraph per classified line -->
//!     <Paragraph Type="Transition"><Text>FADE OUT.</Text></Paragraph>
//!   </Content>
//!   <TitlePage>
//!     <Content>
//!       <Paragraph Type="Action" Alignment="Center">
//!         <Text Style="Bold+Underline">escaped title</Text>
//!       </Paragraph>
//!     </Content>
//!   </TitlePage>
//! </FinalDraft>
//! ```
//!
//! The `FADE IN:` / `FADE OUT.` paragraphs are structural sentinels injected
//! on every export regardless of content; they are not user text.

pub mod escape;

pub use escape::escape_text;

use crate::classify::ElementCategory;
use crate::models::Script;

/// Serializes a script into the exported XML document.
///
/// Deterministic and byte-stable: the same script always produces the same
/// string. Lines were already filtered and classified by [`Script`], so this
/// is a pure formatting pass.
pub fn to_xml(script: &Script) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    out.push_str("<FinalDraft DocumentType=\"Script\" Template=\"No\" Version=\"1\">\n");
    out.push_str("  <Content>\n");

    push_paragraph(&mut out, ElementCategory::SceneHeading, "FADE IN:");
    for line in script.lines() {
        push_paragraph(&mut out, line.category(), &escape_text(line.text()));
    }
    push_paragraph(&mut out, ElementCategory::Transition, "FADE OUT.");

    out.push_str("  </Content>\n");
    out.push_str("  <TitlePage>\n");
    out.push_str("    <Content>\n");
    out.push_str("      <Paragraph Type=\"Action\" Alignment=\"Center\">\n");
    out.push_str(&format!(
        "        <Text Style=\"Bold+Underline\">{}</Text>\n",
        escape_text(script.title())
    ));
    out.push_str("      </Paragraph>\n");
    out.push_str("    </Content>\n");
    out.push_str("  </TitlePage>\n");
    out.push_str("</FinalDraft>\n");
    out
}

fn push_paragraph(out: &mut String, category: ElementCategory, escaped_text: &str) {
    out.push_str(&format!(
        "    <Paragraph Type=\"{}\"><Text>{}</Text></Paragraph>\n",
        category.label(),
        escaped_text
    ));
}
