use crate::models::Program;

/// In-memory, append-only collection of programs
///
/// Insertion order is preserved and meaningful: it is the tie-break when
/// two programs score the same. Stored programs are never handed out
/// mutably.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    programs: Vec<Program>,
}

impl CatalogStore {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-populated with `programs`, in order
    pub fn with_programs(programs: Vec<Program>) -> Self {
        Self { programs }
    }

    /// Appends a program to the end of the catalog
    pub fn add_program(&mut self, program: Program) {
        tracing::debug!(name = %program.name, category = %program.category, "Program added");
        self.programs.push(program);
    }

    /// All programs in insertion order
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn get(&self, index: usize) -> Option<&Program> {
        self.programs.get(index)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl Extend<Program> for CatalogStore {
    fn extend<I: IntoIterator<Item = Program>>(&mut self, iter: I) {
        for program in iter {
            self.add_program(program);
        }
    }
}
