//! Taxonomy transformer

use super::Transformer;
use crate::models::taxonomy::{TaxonomyOption, TaxonomyOrganization};
use crate::models::{document_id, EntityKind, ObjectTag, Slug, TaxonomyDocument};
use crate::source::Element;
use mdc_common::keys;

pub struct TaxonomyTransformer;

impl Transformer for TaxonomyTransformer {
    type Output = TaxonomyDocument;
    const KIND: EntityKind = EntityKind::Taxonomy;

    fn transform(tax: &Element, slug: &str) -> TaxonomyDocument {
        let mduid = tax.value("mduid");

        TaxonomyDocument {
            doc_type: Self::KIND.root_element(),
            id: document_id(&mduid, Self::KIND, slug),
            list_name: tax.value("listName"),
            slug: Slug::new(slug),
            label_only: tax.flag("labelOnly"),
            mduid,
            category_name: tax.optional("categoryName"),
            sub_category: tax.optional("subCategory"),
            options: tax.elements("option").filter_map(option).collect(),
            organizations: tax
                .elements("organization")
                .filter_map(|entry| {
                    Some(TaxonomyOrganization {
                        tag: ObjectTag,
                        key: keys::generate(),
                        organization_name: entry.optional("organization-name")?,
                    })
                })
                .collect(),
        }
    }
}

fn option(entry: &Element) -> Option<TaxonomyOption> {
    let label = entry.value("label");
    let value = entry.value("value");
    if label.is_empty() && value.is_empty() {
        return None;
    }

    Some(TaxonomyOption {
        tag: ObjectTag,
        key: keys::generate(),
        label,
        value,
    })
}
