use darling::{ast::NestedMeta, FromMeta};
use syn::{visit::Visit, Meta};

#[derive(FromMeta, Default)]
pub(crate) struct MockAttr {
    pub debug: darling::util::Flag,
    pub skip_args: Option<Skip>,
    pub skip_fns: Option<Skip>,
}

pub(crate) struct Skip(pub Vec<syn::Path>);

impl FromMeta for Skip {
    fn from_list(list: &[NestedMeta]) -> darling::Result<Self> {
        list.iter()
            .map(|meta| match meta {
                NestedMeta::Meta(Meta::Path(path)) => Ok(path.clone()),
                _ => Err(darling::Error::custom(
                    "expected a list of names like skip_fns(a, b) or skip_args(T, U)",
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Skip)
    }
}

impl MockAttr {
    pub fn test_skip_args(&self, ty: &syn::Type) -> bool {
        let Some(skip) = &self.skip_args else {
            return false;
        };
        let mut visitor = TypeVisitor {
            paths: &skip.0,
            found: false,
        };
        visitor.visit_type(ty);
        visitor.found
    }

    pub fn should_skip_method(&self, method_name: &syn::Ident) -> bool {
        self.skip_fns
            .as_ref()
            .is_some_and(|skip| skip.0.iter().any(|p| p.is_ident(method_name)))
    }
}

struct TypeVisitor<'a> {
    paths: &'a Vec<syn::Path>,
    found: bool,
}

impl Visit<'_> for TypeVisitor<'_> {
    fn visit_path(&mut self, path: &syn::Path) {
        if self.found {
            return;
        }
        if self.paths.iter().any(|p| p == path) {
            self.found = true;
            return;
        }
        for segment in path.segments.iter() {
            self.visit_path_segment(segment);
        }
    }

    fn visit_ident(&mut self, ident: &syn::Ident) {
        if self.found {
            return;
        }
        if self.paths.iter().any(|p| p.is_ident(ident)) {
            self.found = true;
        }
    }
}
