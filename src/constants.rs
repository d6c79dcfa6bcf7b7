//! Built-in static content used when bootstrapping a project.

/// Directory name of the template registry, relative to the executable.
pub const TEMPLATES_DIR: &str = "templates";

/// Environment variable overriding the template registry location.
pub const TEMPLATES_ENV: &str = "APPSEED_TEMPLATES";

/// Allowed project name characters.
pub const PROJECT_NAME_PATTERN: &str = r"^[A-Za-z0-9_\-]+$";

/// Example environment file shipped by templates.
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Environment file generated in the new project.
pub const ENV_FILE: &str = ".env";

/// Ignore file generated in the new project.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Placeholder replaced by the project name inside template files.
pub const PROJECT_NAME_TOKEN: &str = "{{project_name}}";

/// Template entries that are never copied.
pub const DEFAULT_SKIP_PATTERNS: [&str; 3] =
    ["**/node_modules", "**/node_modules/**", "**/.DS_Store"];

pub const GITIGNORE: &str = r#"
# See https://help.github.com/articles/ignoring-files/ for more about ignoring files.

# dependencies
/node_modules
/.pnp
.pnp.js
.yarn/install-state.gz

# testing
/coverage

# next.js
/.next/
/out/

# production
/build

# misc
.DS_Store
*.pem

# debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# local env files
.env*.local
.env

# vercel
.vercel

# typescript
*.tsbuildinfo
next-env.d.ts
"#;

pub const PRE_COMMIT_HOOK: &str = r#"#!/bin/bash
# Run Typecheck, Lint, Prettier to format files before committing
npm run precommit

# Add the files formatted by Prettier to the staging area
git add .
"#;

pub const POST_MERGE_HOOK: &str = r#"#!/bin/bash
# Install dependencies
npm install
"#;

/// Package manager executable.
pub const PACKAGE_MANAGER: &str = "npm";

/// Version control executable.
pub const VCS: &str = "git";
