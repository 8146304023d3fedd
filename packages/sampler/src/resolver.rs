use crate::classifier::{Classifier, TypeCategory};
use crate::error::{SampleError, SampleResult};
use crate::options::{SamplerOptions, MAX_DEPTH_CEILING};
use crate::unify::unify_type;
use crate::value::{Leaf, ObjectValue, ResolvedValue};
use crate::values::ValueSource;
use jsonsample_schema::{clean_doc, hierarchy_fields, ClassDecl, ClassType, SchemaModel, TypeDescriptor, TypeModel};
use tracing::{debug, instrument, warn};

/// Recursive type → sample resolver over a read-only type model
///
/// Holds no per-call state: the recursion level (and, with cycle detection,
/// the current path) are threaded through each call, so one `Sampler` can
/// serve any number of independent `generate` calls.
pub struct Sampler<'m, M: TypeModel + ?Sized> {
    model: &'m M,
    classifier: Classifier,
    options: SamplerOptions,
    values: Box<dyn ValueSource + Send + Sync>,
}

impl<'m, M: TypeModel + ?Sized> Sampler<'m, M> {
    /// A `max_depth` above [`MAX_DEPTH_CEILING`] is lowered to the ceiling
    pub fn new(model: &'m M, mut options: SamplerOptions) -> Self {
        if options.max_depth > MAX_DEPTH_CEILING {
            warn!(
                requested = options.max_depth,
                ceiling = MAX_DEPTH_CEILING,
                "max_depth above ceiling, clamping"
            );
            options.max_depth = MAX_DEPTH_CEILING;
        }

        Self {
            model,
            classifier: Classifier::new(&options),
            values: options.values.source(),
            options,
        }
    }

    /// Replace the value source selected by the options
    pub fn with_value_source(mut self, source: impl ValueSource + Send + Sync + 'static) -> Self {
        self.values = Box::new(source);
        self
    }

    pub fn options(&self) -> &SamplerOptions {
        &self.options
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Resolve `root` starting at level 0
    #[instrument(skip(self, root, doc), fields(root = %root))]
    pub fn generate(&self, root: &TypeDescriptor, doc: Option<&str>) -> SampleResult<ResolvedValue> {
        let value = self.resolve(root, doc, 0)?;
        debug!("Generated sample");
        Ok(value)
    }

    /// Resolve a declared class by name, with its own documentation as root doc
    pub fn generate_class(&self, name: &str) -> SampleResult<ResolvedValue> {
        let decl = self
            .model
            .find_class(name)
            .ok_or_else(|| SampleError::ClassNotFound(name.to_string()))?;

        let root = TypeDescriptor::Class(ClassType::new(decl.name.clone(), Vec::new()));
        self.generate(&root, decl.doc.as_deref())
    }

    /// Resolve `ty` as if reached at recursion `level`
    pub fn resolve(&self, ty: &TypeDescriptor, doc: Option<&str>, level: usize) -> SampleResult<ResolvedValue> {
        let mut path = Vec::new();
        self.resolve_at(ty, doc, level, &mut path)
    }

    fn resolve_at(
        &self,
        ty: &TypeDescriptor,
        doc: Option<&str>,
        level: usize,
        path: &mut Vec<String>,
    ) -> SampleResult<ResolvedValue> {
        let level = level + 1;

        match self.classifier.classify(self.model, ty) {
            TypeCategory::Primitive(_) | TypeCategory::Enum(_) | TypeCategory::Simple => Ok(self.leaf(ty, doc)),

            // Arrays collapse to their deepest component, so `int[][]` samples as `[Integer]`
            TypeCategory::Array(element) | TypeCategory::Container(element) => {
                self.check_depth(ty, level)?;
                let item = self.resolve_at(&element, doc, level, path)?;
                Ok(ResolvedValue::Array(vec![item]))
            }

            TypeCategory::Unresolved => {
                debug!(type_name = %ty, "Unresolved type, using empty object");
                Ok(ResolvedValue::empty_object())
            }

            TypeCategory::Composite(decl) => self.resolve_composite(ty, decl, level, path),
        }
    }

    fn resolve_composite(
        &self,
        ty: &TypeDescriptor,
        decl: &'m ClassDecl,
        level: usize,
        path: &mut Vec<String>,
    ) -> SampleResult<ResolvedValue> {
        self.check_depth(ty, level)?;

        if self.options.detect_cycles && path.contains(&decl.name) {
            let mut cycle = path.clone();
            cycle.push(decl.name.clone());
            return Err(SampleError::CyclicReference { path: cycle });
        }

        path.push(decl.name.clone());

        let mut object = ObjectValue::new();
        for field in hierarchy_fields(self.model, decl, self.options.include_static) {
            let key = match &field.json_name {
                Some(json_name) => json_name.clone(),
                None => self.options.field_naming.apply(&field.name),
            };
            let value = self.resolve_at(&field.type_, field.doc.as_deref(), level, path)?;
            object.insert(key, value);
        }

        path.pop();
        Ok(ResolvedValue::Object(object))
    }

    fn check_depth(&self, ty: &TypeDescriptor, level: usize) -> SampleResult<()> {
        if level <= self.options.max_depth {
            return Ok(());
        }

        // Outer name only; the full text of a deeply nested type is as deep as the type
        let type_name = match ty.deep_component_type() {
            TypeDescriptor::Class(class) => class.name.clone(),
            other => other.canonical_text(),
        };
        Err(SampleError::RecursionLimitExceeded {
            limit: self.options.max_depth,
            type_name,
        })
    }

    fn leaf(&self, ty: &TypeDescriptor, doc: Option<&str>) -> ResolvedValue {
        let label = unify_type(&ty.canonical_text());
        ResolvedValue::Leaf(Leaf {
            sample: self.values.sample(&label),
            doc: clean_doc(doc),
            label,
        })
    }
}

/// Resolve `root` with default options
pub fn generate<M: TypeModel + ?Sized>(
    model: &M,
    root: &TypeDescriptor,
    doc: Option<&str>,
) -> SampleResult<ResolvedValue> {
    Sampler::new(model, SamplerOptions::default()).generate(root, doc)
}

/// Load a schema document and sample one of its classes
pub fn generate_from_json(schema: &str, class: &str, options: SamplerOptions) -> SampleResult<ResolvedValue> {
    let model = SchemaModel::from_json(schema)?;
    Sampler::new(&model, options).generate_class(class)
}
