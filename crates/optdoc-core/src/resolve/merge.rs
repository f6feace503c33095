//! Structural merge of one option subtree into another

use crate::node::OptionNode;

/// Merge `source` into `target`, filling only what `target` lacks.
///
/// Doclet fields are deep-copied without a depth bound; `extends` and
/// `exclude` are never copied. Children named in the target's own `exclude`
/// list are skipped entirely. Missing children are synthesized as stubs and
/// the merge recurses into every source/target child pair.
pub fn merge_from(source: &OptionNode, target: &mut OptionNode) {
    target.doclet.fill_from(&source.doclet);
    target.meta.fill_from(&source.meta);

    for (key, source_child) in &source.children {
        if target.doclet.is_excluded(key) {
            continue;
        }
        let parent_fullname = target.fullname().to_string();
        let target_child = target
            .children
            .entry(key.clone())
            .or_insert_with(|| OptionNode::stub(key, &parent_fullname, &source_child.meta));
        merge_from(source_child, target_child);
    }
}
