//! Vue component emitter for figura.
//!
//! Emits `<script setup lang="ts">` single-file components whose templates
//! use [shadcn-vue](https://www.shadcn-vue.com) wrappers and Tailwind
//! classes.

mod generator;
mod mapping;

pub use generator::{Generator, escape_vue_text};
pub use mapping::SHADCN_VUE;
