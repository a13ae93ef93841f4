//! Test fixture generators
//!
//! Small Go sources built from parts, so tests can state the expected
//! declaration sequence directly.

/// Generate a package clause
pub fn fixture_package(name: &str) -> String {
    format!("package {name}\n")
}

/// Generate a Go file with N functions
pub fn fixture_n_functions(n: usize) -> String {
    let funcs: String = (0..n)
        .map(|i| format!("\nfunc func_{i}() int {{\n\treturn {i}\n}}\n"))
        .collect();
    format!("{}{funcs}", fixture_package("main"))
}

/// Generate a Go file with an import group followed by N-1 grouped
/// declarations cycling const/var/type (imports must come first)
pub fn fixture_n_groups(n: usize) -> String {
    let groups: String = (0..n)
        .map(|i| match (i, i % 3) {
            (0, _) => "\nimport (\n\tstr \"strings\"\n)\n".to_string(),
            (_, 1) => format!("\nconst (\n\tC{i} = {i}\n\tD{i} = {i}\n)\n"),
            (_, 2) => format!("\nvar (\n\tv{i} int\n\tw{i} string\n)\n"),
            _ => format!("\ntype (\n\tT{i} struct{{}}\n\tU{i} = int\n)\n"),
        })
        .collect();
    format!("{}{groups}", fixture_package("groups"))
}

/// Generate a method on a struct type
pub fn fixture_method(recv_type: &str, name: &str) -> String {
    format!("\nfunc (r *{recv_type}) {name}() {{}}\n")
}

/// A mixed file and its expected labels, in source order
pub fn fixture_mixed() -> (String, Vec<&'static str>) {
    let source = r#"package server

import (
	"fmt"
	"net/http"
)

// Server handles requests.
type Server struct {
	addr string
}

const defaultAddr = ":8080"

func New() *Server {
	return &Server{addr: defaultAddr}
}

func (s *Server) Run() error {
	fmt.Println("listening on", s.addr)
	return http.ListenAndServe(s.addr, nil)
}

var started bool
"#;
    (
        source.to_string(),
        vec!["general", "general", "general", "func", "func", "general"],
    )
}
