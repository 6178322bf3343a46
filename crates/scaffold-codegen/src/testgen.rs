//! Test skeleton synthesis for existing classes.

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tera::Tera;

use scaffold_core::source::SourceModel;
use scaffold_core::{ArtifactKind, GeneratedArtifact, ScaffoldConfig, ScaffoldResult};
use scaffold_introspect::Role;

use crate::templates;

#[derive(Debug, Serialize)]
struct MockView<'a> {
    name: &'a str,
    ty: &'a str,
}

#[derive(Debug, Serialize)]
struct TestView<'a> {
    test_name: String,
    method: &'a str,
}

/// Renders JUnit 5 skeletons: Mockito unit tests for plain classes and a
/// MockMvc smoke test for controllers.
pub struct TestSynthesizer {
    tera: Tera,
}

impl TestSynthesizer {
    pub fn new() -> ScaffoldResult<Self> {
        Ok(Self {
            tera: templates::engine()?,
        })
    }

    pub fn synthesize(&self, model: &SourceModel, role: Role) -> ScaffoldResult<String> {
        match role {
            Role::Plain => self.unit_test(model),
            Role::HttpFacing => self.web_test(model),
        }
    }

    /// Wrap rendered test text as `{generated_tests_dir}/{Class}Test.java`.
    pub fn artifact(&self, model: &SourceModel, content: String, config: &ScaffoldConfig) -> GeneratedArtifact {
        GeneratedArtifact {
            kind: ArtifactKind::Test,
            relative_path: PathBuf::from(&config.generated_tests_dir)
                .join(ArtifactKind::Test.file_name(&model.class_name)),
            content,
        }
    }

    fn unit_test(&self, model: &SourceModel) -> ScaffoldResult<String> {
        let mocks: Vec<MockView> = model
            .private_fields()
            .map(|f| MockView {
                name: &f.name,
                ty: &f.declared_type,
            })
            .collect();

        // Overloads share a name; number the repeats so test names stay unique.
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let tests: Vec<TestView> = model
            .public_methods()
            .map(|m| {
                let count = seen.entry(m.name.as_str()).or_insert(0);
                *count += 1;
                let test_name = if *count == 1 {
                    format!("{}_shouldExecuteHappyPath", m.name)
                } else {
                    format!("{}_shouldExecuteHappyPath{}", m.name, count)
                };
                TestView {
                    test_name,
                    method: &m.name,
                }
            })
            .collect();

        let mut context = tera::Context::new();
        context.insert("package", &model.package_name);
        context.insert("class_name", &model.class_name);
        context.insert("mocks", &mocks);
        context.insert("tests", &tests);
        templates::render(&self.tera, templates::UNIT_TEST, &context)
    }

    fn web_test(&self, model: &SourceModel) -> ScaffoldResult<String> {
        let base_name = controller_base_name(&model.class_name);

        let mut context = tera::Context::new();
        context.insert("package", &model.package_name);
        context.insert("class_name", &model.class_name);
        context.insert("base_name", base_name);
        context.insert("endpoint", &endpoint_for(&model.class_name));
        templates::render(&self.tera, templates::WEB_TEST, &context)
    }
}

/// `CustomerController` -> `Customer`.
pub fn controller_base_name(class_name: &str) -> &str {
    class_name.strip_suffix("Controller").unwrap_or(class_name)
}

/// `CustomerController` -> `/api/customers`.
pub fn endpoint_for(class_name: &str) -> String {
    format!("/api/{}s", controller_base_name(class_name).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_core::source::{FieldInfo, MethodInfo, Visibility};
    use std::collections::BTreeSet;

    fn method(name: &str, visibility: Visibility) -> MethodInfo {
        MethodInfo {
            name: name.to_string(),
            visibility,
        }
    }

    fn field(name: &str, ty: &str, visibility: Visibility, is_static: bool) -> FieldInfo {
        FieldInfo {
            name: name.to_string(),
            declared_type: ty.to_string(),
            visibility,
            is_static,
        }
    }

    fn service_model() -> SourceModel {
        SourceModel {
            package_name: "com.example.customer".to_string(),
            class_name: "CustomerService".to_string(),
            markers: BTreeSet::from(["Service".to_string()]),
            fields: vec![
                field("log", "Logger", Visibility::Private, true),
                field("repository", "CustomerRepository", Visibility::Private, false),
                field("mapper", "CustomerMapper", Visibility::Private, false),
                field("region", "String", Visibility::Public, false),
            ],
            methods: vec![
                method("findAll", Visibility::Public),
                method("findByEmail", Visibility::Public),
                method("findByEmail", Visibility::Public),
                method("helper", Visibility::Private),
            ],
        }
    }

    #[test]
    fn test_unit_test_mocks_every_private_field() {
        let text = TestSynthesizer::new()
            .unwrap()
            .synthesize(&service_model(), Role::Plain)
            .unwrap();
        assert!(text.starts_with("package com.example.customer;\n"));
        assert!(text.contains("@ExtendWith(MockitoExtension.class)"));
        assert!(text.contains("class CustomerServiceTest {"));
        assert!(text.contains("    @Mock\n    private CustomerRepository repository;\n"));
        assert!(text.contains("    @Mock\n    private CustomerMapper mapper;\n"));
        assert!(text.contains("    @Mock\n    private Logger log;\n"));
        assert_eq!(text.matches("@Mock\n").count(), 3);
        assert!(!text.contains("private String region;"));
        assert!(text.contains("    @InjectMocks\n    private CustomerService subject;\n"));
    }

    #[test]
    fn test_unit_test_has_one_block_per_public_method() {
        let text = TestSynthesizer::new()
            .unwrap()
            .synthesize(&service_model(), Role::Plain)
            .unwrap();
        assert_eq!(text.matches("@Test\n").count(), 3);
        assert_eq!(text.matches("assertThat(true).isTrue();").count(), 3);
        assert!(text.contains("void findAll_shouldExecuteHappyPath()"));
        assert!(text.contains("void findByEmail_shouldExecuteHappyPath()"));
        assert!(text.contains("void findByEmail_shouldExecuteHappyPath2()"));
        assert!(text.contains("// var result = subject.findAll();"));
        assert!(!text.contains("helper"));
    }

    #[test]
    fn test_unit_test_without_methods_or_fields() {
        let model = SourceModel {
            fields: Vec::new(),
            methods: Vec::new(),
            ..service_model()
        };
        let text = TestSynthesizer::new().unwrap().synthesize(&model, Role::Plain).unwrap();
        assert!(!text.contains("@Mock\n"));
        assert!(!text.contains("@Test\n"));
        assert!(text.contains("class CustomerServiceTest {\n\n    @InjectMocks"));
    }

    #[test]
    fn test_web_test_single_smoke_request() {
        let model = SourceModel {
            package_name: "com.example.customer".to_string(),
            class_name: "CustomerController".to_string(),
            markers: BTreeSet::from(["RestController".to_string()]),
            fields: Vec::new(),
            methods: vec![
                method("findAll", Visibility::Public),
                method("create", Visibility::Public),
            ],
        };
        let text = TestSynthesizer::new()
            .unwrap()
            .synthesize(&model, Role::HttpFacing)
            .unwrap();
        assert!(text.contains("@WebMvcTest(CustomerController.class)"));
        assert!(text.contains("@MockBean\n    private CustomerService service;"));
        assert!(text.contains("mockMvc.perform(get(\"/api/customers\"))"));
        assert!(text.contains(".andExpect(status().isOk());"));
        assert_eq!(text.matches("@Test\n").count(), 1);
    }

    #[test]
    fn test_endpoint_strips_only_trailing_controller() {
        assert_eq!(endpoint_for("CustomerController"), "/api/customers");
        assert_eq!(endpoint_for("ControllerRegistryController"), "/api/controllerregistrys");
        assert_eq!(endpoint_for("Ping"), "/api/pings");
        assert_eq!(controller_base_name("OrderController"), "Order");
    }

    #[test]
    fn test_artifact_path() {
        let synthesizer = TestSynthesizer::new().unwrap();
        let artifact = synthesizer.artifact(&service_model(), "x".to_string(), &ScaffoldConfig::default());
        assert_eq!(
            artifact.relative_path,
            PathBuf::from("generated-tests/CustomerServiceTest.java")
        );
        assert_eq!(artifact.kind, ArtifactKind::Test);
    }
}
