//! Renders the complete source text of a Java parameter object class.

use edamame_codegen::{CodeBuilder, CodeStyle, TypeUsage, capitalize, render_type};
use edamame_ir::{Annotation, Parameter};

use crate::error::{Error, Result};

/// One field-to-be in the generated class.
#[derive(Debug, Clone)]
struct ParameterSpec {
    parameter: Parameter,
    setter_required: bool,
}

/// Accumulates parameter specifications plus class identity and style, then
/// renders the full class text in a single pass.
///
/// A builder is single-use per target class: configure it, add fields in
/// the desired declaration order, and call [`render`](Self::render) once.
/// Rendering is a pure function of the accumulated state, so the same
/// inputs always produce byte-identical text.
///
/// # Example
///
/// ```
/// use edamame_codegen::CodeStyle;
/// use edamame_ir::{JavaType, Parameter};
/// use edamame_java::BeanClassBuilder;
///
/// let mut builder = BeanClassBuilder::new();
/// builder.set_class_name("Point");
/// builder.set_package_name("p");
/// builder.set_style(CodeStyle::default());
/// builder.add_field(Parameter::new("x", JavaType::int()), false);
/// builder.add_field(Parameter::new("y", JavaType::int()), false);
///
/// let text = builder.render().unwrap();
/// assert!(text.contains("private final int x;"));
/// ```
#[derive(Debug, Default)]
pub struct BeanClassBuilder {
    class_name: Option<String>,
    package_name: Option<String>,
    type_params: Vec<String>,
    fields: Vec<ParameterSpec>,
    style: Option<CodeStyle>,
}

impl BeanClassBuilder {
    /// Create an unconfigured builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of the generated class. The last call wins.
    pub fn set_class_name(&mut self, name: impl Into<String>) {
        self.class_name = Some(name.into());
    }

    /// Set the target package. An empty name means the default package and
    /// suppresses the package clause. The last call wins.
    pub fn set_package_name(&mut self, name: impl Into<String>) {
        self.package_name = Some(name.into());
    }

    /// Set the generic type parameters of the generated class, in order.
    /// The last call wins.
    pub fn set_type_arguments(
        &mut self,
        params: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.type_params = params.into_iter().map(Into::into).collect();
    }

    /// Set the naming/style configuration. The last call wins.
    pub fn set_style(&mut self, style: CodeStyle) {
        self.style = Some(style);
    }

    /// Append one parameter specification. Call order defines field
    /// declaration order, constructor parameter order, and accessor order
    /// alike.
    pub fn add_field(&mut self, parameter: Parameter, setter_required: bool) {
        self.fields.push(ParameterSpec {
            parameter,
            setter_required,
        });
    }

    /// Render the complete class source text.
    ///
    /// Fails without producing partial output when the builder is not
    /// fully configured or a parameter snapshot is malformed.
    pub fn render(&self) -> Result<String> {
        let class_name = self
            .class_name
            .as_deref()
            .ok_or_else(|| Box::new(Error::ClassNameNotSet))?;
        let package_name = self
            .package_name
            .as_deref()
            .ok_or_else(|| Box::new(Error::PackageNameNotSet))?;
        let style = self
            .style
            .as_ref()
            .ok_or_else(|| Box::new(Error::StyleNotSet))?;

        for (index, spec) in self.fields.iter().enumerate() {
            if spec.parameter.name.is_empty() {
                return Err(Error::empty_parameter_name(index));
            }
        }

        let pass = RenderPass {
            class_name,
            style,
            fields: &self.fields,
        };

        let mut out = CodeBuilder::new(style.indent);
        if !package_name.is_empty() {
            out.push_line(&format!("package {package_name};"));
            out.push_blank();
        }
        out.push_line(&self.class_header(class_name));
        out.push_indent();
        pass.render_fields(&mut out)?;
        if !self.fields.is_empty() {
            out.push_blank();
        }
        pass.render_constructor(&mut out)?;
        pass.render_getters(&mut out)?;
        pass.render_setters(&mut out)?;
        out.push_dedent();
        out.push_line("}");
        Ok(out.build())
    }

    fn class_header(&self, class_name: &str) -> String {
        let mut header = format!("public class {class_name}");
        if !self.type_params.is_empty() {
            header.push('<');
            header.push_str(&self.type_params.join(","));
            header.push('>');
        }
        header.push_str(" {");
        header
    }
}

/// Transient state for one render call.
struct RenderPass<'a> {
    class_name: &'a str,
    style: &'a CodeStyle,
    fields: &'a [ParameterSpec],
}

impl RenderPass<'_> {
    fn render_fields(&self, out: &mut CodeBuilder) -> Result<()> {
        for spec in self.fields {
            let parameter = &spec.parameter;
            if let Some(doc) = &parameter.doc {
                for line in doc.lines() {
                    out.push_line(line);
                }
            }
            self.push_annotation_lines(out, parameter);

            let mut declaration = String::from("private ");
            if parameter.is_static() {
                declaration.push_str("static ");
            }
            if !spec.setter_required {
                declaration.push_str("final ");
            }
            declaration.push_str(&self.storage_type(parameter)?);
            declaration.push(' ');
            declaration.push_str(&self.field_name(parameter));
            declaration.push(';');
            out.push_line(&declaration);
        }
        Ok(())
    }

    fn render_constructor(&self, out: &mut CodeBuilder) -> Result<()> {
        let mut params = Vec::with_capacity(self.fields.len());
        for spec in self.fields {
            params.push(self.render_parameter(&spec.parameter)?);
        }
        out.push_line(&format!(
            "public {}({}) {{",
            self.class_name,
            params.join(", ")
        ));
        out.push_indent();
        for spec in self.fields {
            let parameter = &spec.parameter;
            out.push_line(&assignment(
                &self.field_name(parameter),
                &self.parameter_name(parameter),
            ));
        }
        out.push_dedent();
        out.push_line("}");
        Ok(())
    }

    fn render_getters(&self, out: &mut CodeBuilder) -> Result<()> {
        for spec in self.fields {
            let parameter = &spec.parameter;
            out.push_blank();
            self.push_annotation_lines(out, parameter);
            let accessor = if parameter.ty.is_boolean() { "is" } else { "get" };
            out.push_line(&format!(
                "public {} {}{}() {{",
                self.storage_type(parameter)?,
                accessor,
                capitalize(self.base_name(parameter))
            ));
            out.push_indent();
            out.push_line(&format!("return {};", self.field_name(parameter)));
            out.push_dedent();
            out.push_line("}");
        }
        Ok(())
    }

    fn render_setters(&self, out: &mut CodeBuilder) -> Result<()> {
        for spec in self.fields {
            if !spec.setter_required {
                continue;
            }
            let parameter = &spec.parameter;
            out.push_blank();
            out.push_line(&format!(
                "public void set{}({}) {{",
                capitalize(self.base_name(parameter)),
                self.render_parameter(parameter)?
            ));
            out.push_indent();
            out.push_line(&assignment(
                &self.field_name(parameter),
                &self.parameter_name(parameter),
            ));
            out.push_dedent();
            out.push_line("}");
        }
        Ok(())
    }

    /// A constructor/setter parameter: inline annotations, optional
    /// `final`, declaration-site type, generated name.
    fn render_parameter(&self, parameter: &Parameter) -> Result<String> {
        let mut rendered = String::new();
        for annotation in &parameter.annotations {
            if let Some(text) = annotation_text(annotation) {
                rendered.push_str(&text);
                rendered.push(' ');
            }
        }
        if self.style.generate_final_parameters {
            rendered.push_str("final ");
        }
        rendered.push_str(&self.declaration_type(parameter)?);
        rendered.push(' ');
        rendered.push_str(&self.parameter_name(parameter));
        Ok(rendered)
    }

    fn push_annotation_lines(&self, out: &mut CodeBuilder, parameter: &Parameter) {
        for annotation in &parameter.annotations {
            if let Some(text) = annotation_text(annotation) {
                out.push_line(&text);
            }
        }
    }

    fn base_name<'p>(&self, parameter: &'p Parameter) -> &'p str {
        self.style.base_name(&parameter.name)
    }

    fn field_name(&self, parameter: &Parameter) -> String {
        self.style
            .field_name(self.base_name(parameter), parameter.is_static())
    }

    fn parameter_name(&self, parameter: &Parameter) -> String {
        self.style.parameter_name(self.base_name(parameter))
    }

    fn declaration_type(&self, parameter: &Parameter) -> Result<String> {
        self.site_type(parameter, TypeUsage::Declaration)
    }

    fn storage_type(&self, parameter: &Parameter) -> Result<String> {
        self.site_type(parameter, TypeUsage::Storage)
    }

    fn site_type(&self, parameter: &Parameter, usage: TypeUsage) -> Result<String> {
        render_type(&parameter.ty, parameter.varargs, usage)
            .map_err(|e| Error::malformed_parameter(&parameter.name, e))
    }
}

/// Assign the generated parameter to its field. When the two names
/// coincide, the field must be disambiguated through `this` so the
/// parameter is not bound to itself.
fn assignment(field_name: &str, parameter_name: &str) -> String {
    if field_name == parameter_name {
        format!("this.{field_name} = {parameter_name};")
    } else {
        format!("{field_name} = {parameter_name};")
    }
}

fn annotation_text(annotation: &Annotation) -> Option<String> {
    annotation
        .qualified_name
        .as_ref()
        .map(|name| format!("@{}{}", name, annotation.args))
}
