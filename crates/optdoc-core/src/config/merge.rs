//! Configuration merging logic
//!
//! Combines a configuration with the base it `extends`. The child always
//! wins; the base only fills what the child leaves unset.

use super::optdoc_config::*;

impl OptdocConfiguration {
    /// Merge a base config into this one (current takes precedence)
    ///
    /// `$schema` and `extends` are file-specific and never merged.
    pub fn merge_with(&mut self, base: OptdocConfiguration) {
        merge_section(&mut self.files, base.files, FilesConfiguration::merge_with);
        merge_section(
            &mut self.resolver,
            base.resolver,
            ResolverConfiguration::merge_with,
        );
        merge_section(
            &mut self.emitter,
            base.emitter,
            EmitterConfiguration::merge_with,
        );
    }
}

impl FilesConfiguration {
    pub fn merge_with(&mut self, base: FilesConfiguration) {
        fill(&mut self.namespace_tree, base.namespace_tree);
        fill(&mut self.options_tree, base.options_tree);
        fill(&mut self.output, base.output);
    }
}

impl ResolverConfiguration {
    pub fn merge_with(&mut self, base: ResolverConfiguration) {
        fill(&mut self.generic_parent, base.generic_parent);
        fill(&mut self.generic_alias, base.generic_alias);
    }
}

impl EmitterConfiguration {
    /// Lists are replaced as a whole, never concatenated
    pub fn merge_with(&mut self, base: EmitterConfiguration) {
        fill(&mut self.namespace, base.namespace);
        fill(&mut self.docs_base_url, base.docs_base_url);
        fill(&mut self.default_products, base.default_products);
        fill(&mut self.series_root, base.series_root);
        fill(&mut self.required_paths, base.required_paths);
        fill(&mut self.series_variants, base.series_variants);
    }
}

fn merge_section<T>(target: &mut Option<T>, base: Option<T>, merge: fn(&mut T, T)) {
    let Some(base) = base else {
        return;
    };
    if let Some(current) = target {
        merge(current, base);
    } else {
        *target = Some(base);
    }
}

fn fill<T>(target: &mut Option<T>, base: Option<T>) {
    if target.is_none() {
        *target = base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_values_take_precedence() {
        let mut child = OptdocConfiguration {
            files: Some(FilesConfiguration {
                output: Some("child.json".to_string()),
                ..FilesConfiguration::default()
            }),
            ..OptdocConfiguration::default()
        };
        let base = OptdocConfiguration {
            files: Some(FilesConfiguration {
                namespace_tree: Some("base-ns.json".to_string()),
                output: Some("base.json".to_string()),
                ..FilesConfiguration::default()
            }),
            ..OptdocConfiguration::default()
        };

        child.merge_with(base);
        let files = child.files.unwrap();
        assert_eq!(files.output.as_deref(), Some("child.json"));
        assert_eq!(files.namespace_tree.as_deref(), Some("base-ns.json"));
        assert!(files.options_tree.is_none());
    }

    #[test]
    fn test_missing_sections_taken_from_base() {
        let mut child = OptdocConfiguration::default();
        let base = OptdocConfiguration {
            emitter: Some(EmitterConfiguration {
                required_paths: Some(vec!["series.type".to_string(), "chart.type".to_string()]),
                ..EmitterConfiguration::default()
            }),
            ..OptdocConfiguration::default()
        };

        child.merge_with(base);
        assert_eq!(
            child.emitter.unwrap().required_paths.unwrap().len(),
            2
        );
    }

    #[test]
    fn test_schema_and_extends_not_merged() {
        let mut child = OptdocConfiguration::default();
        let base = OptdocConfiguration {
            schema: Some("schema.json".to_string()),
            extends: Some("other.json".to_string()),
            ..OptdocConfiguration::default()
        };

        child.merge_with(base);
        assert!(child.schema.is_none());
        assert!(child.extends.is_none());
    }
}
