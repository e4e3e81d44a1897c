//! The eight demonstration sections.
//!
//! Each `write_*` function emits only the body of its section; the header and
//! the trailing blank line are the runner's job.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::Write;

use anyhow::Result;

use crate::helpers::{add, multiply};
use crate::persona::Persona;

/// Sections in the order they are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Variables,
    Arrays,
    Lists,
    Maps,
    Loops,
    Functions,
    Structs,
    Iterators,
}

pub const SECTION_TITLES: [&str; 8] = [
    "Ejemplo 1: Variables y Tipos",
    "Ejemplo 2: Arrays",
    "Ejemplo 3: Listas (Vec)",
    "Ejemplo 4: Mapas (BTreeMap)",
    "Ejemplo 5: Bucles",
    "Ejemplo 6: Funciones",
    "Ejemplo 7: Structs y Métodos",
    "Ejemplo 8: Iteradores",
];

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Variables,
        Section::Arrays,
        Section::Lists,
        Section::Maps,
        Section::Loops,
        Section::Functions,
        Section::Structs,
        Section::Iterators,
    ];

    /// One-based position in the walkthrough.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn title(self) -> &'static str {
        SECTION_TITLES[self as usize]
    }
}

/// Write `label: ` followed by every item and a trailing space, then a newline.
pub fn write_spaced<W, I>(out: &mut W, label: &str, items: I) -> Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    write!(out, "{label}: ")?;
    for item in items {
        write!(out, "{item} ")?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_scalars<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let numero: i32 = 42;
    let texto: &str = "Hola desde Java";
    let decimal: f64 = 3.14;
    let es_verdadero: bool = true;
    let caracter: char = 'A';

    writeln!(out, "Entero: {numero}")?;
    writeln!(out, "String: {texto}")?;
    writeln!(out, "Decimal: {decimal}")?;
    writeln!(out, "Booleano: {es_verdadero}")?;
    writeln!(out, "Carácter: {caracter}")?;
    Ok(())
}

pub fn write_array<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let numeros: [i32; 5] = [1, 2, 3, 4, 5];
    write_spaced(out, "Array", numeros)
}

/// The growable list shared by the lists and iterators sections.
pub fn build_list() -> Vec<i32> {
    let mut lista = Vec::new();
    lista.push(10);
    lista.push(20);
    lista.push(30);
    lista.push(40);
    lista.push(50);
    lista
}

pub fn write_list<W: Write + ?Sized>(out: &mut W, lista: &[i32]) -> Result<()> {
    write_spaced(out, "Lista", lista)
}

pub fn build_ages() -> BTreeMap<&'static str, i32> {
    let mut mapa = BTreeMap::new();
    mapa.insert("Juan", 30);
    mapa.insert("Ana", 25);
    mapa.insert("Carlos", 35);
    mapa
}

/// One `<name>: <age> años` line per entry, in key order.
pub fn write_map<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    for (nombre, edad) in &build_ages() {
        writeln!(out, "{nombre}: {edad} años")?;
    }
    Ok(())
}

pub fn write_loops<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    write!(out, "For loop: ")?;
    for i in 0..5 {
        write!(out, "{i} ")?;
    }
    writeln!(out)?;

    write!(out, "While loop: ")?;
    let mut j = 0;
    while j < 5 {
        write!(out, "{j} ")?;
        j += 1;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_functions<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let resultado = add(10, 20);
    writeln!(out, "Suma de 10 + 20 = {resultado}")?;
    writeln!(out, "Multiplicación de 5 * 3 = {}", multiply(5, 3))?;
    Ok(())
}

pub fn write_persona<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let persona = Persona::new("Juan", 30);
    persona.greet(out)?;
    writeln!(out, "Edad: {}", persona.age())?;
    Ok(())
}

/// Even elements of `numbers`, relative order preserved.
pub fn even_numbers(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

pub fn write_evens<W: Write + ?Sized>(out: &mut W, lista: &[i32]) -> Result<()> {
    write_spaced(out, "Números pares", even_numbers(lista))
}
