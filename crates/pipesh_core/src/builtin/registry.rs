use super::Builtin;

/// An ordered collection of built-in commands.
///
/// Lookups are exact and case-sensitive. If several commands share a name, the
/// command that was registered first is used.
#[derive(Default)]
pub struct BuiltinRegistry {
    builtins: Vec<Box<dyn Builtin>>,
}

impl BuiltinRegistry {
    /// Constructs a registry from a list of commands.
    pub fn new(builtins: Vec<Box<dyn Builtin>>) -> Self {
        Self { builtins }
    }

    /// Returns the first built-in command with a specific name.
    pub fn get(&self, name: &str) -> Option<&dyn Builtin> {
        self.builtins
            .iter()
            .find(|builtin| builtin.name() == name)
            .map(|builtin| builtin.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Args, ExitStatus};

    use super::*;

    struct Constant(&'static str, ExitStatus);
    impl Builtin for Constant {
        fn name(&self) -> &str {
            self.0
        }

        fn run(&self, _: &mut Args) -> ExitStatus {
            self.1
        }
    }

    #[test]
    fn it_is_empty_by_default() {
        let registry = BuiltinRegistry::default();
        assert!(registry.get("exit").is_none());
    }

    #[test]
    fn it_finds_builtins_by_exact_name() {
        let registry = BuiltinRegistry::new(vec![Box::new(Constant("exit", 0))]);
        assert!(registry.get("exit").is_some());
        assert!(registry.get("Exit").is_none());
        assert!(registry.get("exi").is_none());
        assert!(registry.get("exit ").is_none());
    }

    #[test]
    fn the_first_registered_builtin_wins() {
        let registry = BuiltinRegistry::new(vec![
            Box::new(Constant("cmd", 1)),
            Box::new(Constant("cmd", 2)),
            Box::new(Constant("other", 3)),
        ]);

        let mut should_exit = false;
        let mut io = crate::Io::new(
            Box::new(std::io::empty()),
            Box::new(std::io::sink()),
            Box::new(std::io::sink()),
        );
        let argv = vec!["cmd".to_owned()];
        let mut args = Args::new(&argv, 0, &mut should_exit, &mut io);

        let builtin = registry.get("cmd").expect("registered");
        assert_eq!(builtin.run(&mut args), 1);
        assert_eq!(registry.get("other").map(|builtin| builtin.name()), Some("other"));
    }
}
