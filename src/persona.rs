use std::io::Write;

use anyhow::Result;

/// A named person with a mutable age. Neither field is validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Persona {
    name: String,
    age: i32,
}

impl Persona {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// The greeting line, without a trailing newline.
    pub fn greeting(&self) -> String {
        format!("Hola, soy {}", self.name)
    }

    /// Write the greeting line to `out`.
    pub fn greet<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.greeting())?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_writes_current_name() -> Result<()> {
        let mut persona = Persona::new("Juan", 30);
        let mut out = Vec::new();
        persona.greet(&mut out)?;
        persona.set_name("Ana");
        persona.greet(&mut out)?;
        assert_eq!(String::from_utf8(out)?, "Hola, soy Juan\nHola, soy Ana\n");
        Ok(())
    }

    #[test]
    fn accessors_reflect_setters() {
        let mut persona = Persona::new("Juan", 30);
        assert_eq!(persona.name(), "Juan");
        assert_eq!(persona.age(), 30);

        persona.set_name("Carlos");
        persona.set_age(35);
        assert_eq!(persona.name(), "Carlos");
        assert_eq!(persona.age(), 35);
    }

    #[test]
    fn setters_do_not_validate() {
        let mut persona = Persona::new("", 0);
        persona.set_age(-1);
        assert_eq!(persona.age(), -1);
        assert_eq!(persona.greeting(), "Hola, soy ");
    }
}
