//! Text generated into every new project.

use crate::domain::entities::{ProjectTarget, RenderContext};
use crate::domain::value_objects::{Assistant, ResourceKind};

/// Name of the Copilot instructions file inside the assistant-config bundle.
pub const INSTRUCTIONS_FILE: &str = "copilot-instructions.md";

/// Directory inside the commands bundle holding one `*.md` per slash command.
pub const COMMANDS_SUBDIR: &str = "commands";

/// Fixed `.gitignore` content: build artefacts, IDE files, OS files and
/// generated output.
pub const GITIGNORE: &str = "\
# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
venv/
ENV/

# IDE
.vscode/
.idea/
*.swp
*.swo

# OS
.DS_Store
Thumbs.db

# Generated files
*.pdf
*-final.md
";

const README_TEMPLATE: &str = r#"# {{PROJECT_NAME}}

Conceptual Model Kit Project

AI assistant: **{{ASSISTANT_NAME}}** (`{{ASSISTANT}}`)

## Getting Started

This project has been configured with **Claude Code slash commands** for creating conceptual models.

### Available Slash Commands

When using Claude Code in this project, you have access to these commands:

- `/concept.init <name>` - Start a new conceptual model
- `/concept.add-object <name>` - Add an object to your model
- `/concept.add-relationship <from> <to>` - Map object relationships
- `/concept.add-action <name>` - Document user workflows
- `/concept.review` - Get comprehensive feedback on your model
- `/concept.generate` - Create final formatted document
- `/concept.status` - Quick model overview

### Create Your First Conceptual Model

```bash
# 1. Open your assistant in this directory
{{ASSISTANT_COMMAND}}

# 2. Inside the assistant, use slash commands:
/concept.init {{PROJECT_NAME}}

# 3. Add your core objects
/concept.add-object User
/concept.add-object Post
/concept.add-object Comment

# 4. Map relationships
/concept.add-relationship User Post
/concept.add-relationship Post Comment

# 5. Add user workflows
/concept.add-action create-post
/concept.add-action add-comment

# 6. Review your model
/concept.review

# 7. Generate final document
/concept.generate
```

## Documentation

- See `.claude/steering/conceptual-modeling-guide.md` for the philosophy and principles
- Check `examples/` for reference models at different complexity levels
- Review `templates/` for document structure
- See `.claude/commands/` for detailed command documentation

## Command Details

Each slash command in `.claude/commands/` provides:
- Detailed workflow instructions
- Interactive forms for gathering information
- Best practices and examples
- Error handling guidance

## Project Structure

```
{{PROJECT_NAME}}/
├── .claude/
│   ├── commands/          # Slash commands for Claude Code
│   └── steering/          # Conceptual modeling guide
├── .github/               # Copilot instructions
├── docs/                  # Your conceptual models go here
├── examples/              # Reference models
│   ├── todo-app/         # Simple example
│   ├── e-commerce/       # Medium complexity
│   └── google-calendar/  # Complex example
└── templates/            # Document templates
```

## Resources

- [Johnson & Henderson - Conceptual Models](https://www.sciencedirect.com/science/article/abs/pii/S0953543805800340)
- [The Design of Everyday Things - Don Norman](https://en.wikipedia.org/wiki/The_Design_of_Everyday_Things)

---

Generated with Conceptual Kit {{KIT_VERSION}}
"#;

/// Render the project README.
pub fn readme(context: &RenderContext) -> String {
    context.render(README_TEMPLATE)
}

/// Guidance printed after a successful `init`.
pub fn next_steps(target: &ProjectTarget, assistant: Assistant) -> Vec<String> {
    vec![
        format!("cd {}", target.cd_hint()),
        format!(
            "Read {} to understand the approach",
            ResourceKind::GuideDocument.relative_path()
        ),
        "Check examples/ for reference models".to_string(),
        format!(
            "Start modeling: {} 'concept init MyApp'",
            assistant.launch_command()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn readme_heading_is_project_name() {
        let ctx = RenderContext::new("shop-model", Assistant::Claude);
        let text = readme(&ctx);
        assert_eq!(text.lines().next(), Some("# shop-model"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn readme_heading_keeps_braces_in_name() {
        for _ in 0..20 {
            let ctx = RenderContext::new("{{ASSISTANT}}-kit", Assistant::Claude);
            let text = readme(&ctx);
            assert_eq!(text.lines().next(), Some("# {{ASSISTANT}}-kit"));
        }
    }

    #[test]
    fn readme_names_the_assistant() {
        let ctx = RenderContext::new("x", Assistant::Windsurf);
        let text = readme(&ctx);
        assert!(text.contains("**Windsurf** (`windsurf`)"));
        assert!(text.contains("/concept.init x"));
    }

    #[test]
    fn gitignore_covers_generated_output() {
        assert!(GITIGNORE.contains("*.pdf"));
        assert!(GITIGNORE.contains("*-final.md"));
        assert!(GITIGNORE.contains(".DS_Store"));
        assert!(GITIGNORE.contains(".idea/"));
    }

    #[test]
    fn next_steps_for_in_place_target() {
        let target = ProjectTarget::resolve(None, true, Path::new("/tmp/model")).unwrap();
        let steps = next_steps(&target, Assistant::Copilot);
        assert_eq!(steps[0], "cd .");
        assert!(steps[3].contains("your-ai"));
    }

    #[test]
    fn next_steps_for_named_target() {
        let target = ProjectTarget::resolve(Some("shop"), false, Path::new("/tmp")).unwrap();
        let steps = next_steps(&target, Assistant::Claude);
        assert_eq!(steps[0], "cd shop");
        assert!(steps[3].starts_with("Start modeling: claude"));
    }
}
