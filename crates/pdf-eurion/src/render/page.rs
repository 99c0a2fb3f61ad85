//! Page and page-tree construction shared by the overlay and the output document

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Add a page of the given size whose content is `content` and whose
/// resources are `resources`. The page is not yet attached to a page tree
/// beyond its `Parent` link; pass the returned ID to [`finish_document`].
pub fn add_page(
    doc: &mut Document,
    parent_pages_id: ObjectId,
    width: f64,
    height: f64,
    content: Vec<u8>,
    resources: Dictionary,
) -> ObjectId {
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

    let page_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(parent_pages_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width as f32),
                Object::Real(height as f32),
            ]),
        ),
        ("Contents", Object::Reference(content_id)),
        ("Resources", Object::Dictionary(resources)),
    ]);

    doc.add_object(page_dict)
}

/// Write the page tree and catalog, in the order the pages were given.
pub fn finish_document(doc: &mut Document, pages_tree_id: ObjectId, page_ids: &[ObjectId]) {
    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(page_ids.len() as i64)),
    ]);
    doc.objects.insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    doc.trailer.set("Root", catalog_id);
}
