//! Text blocks emitted for each stage. Every byte here is part of the output contract.

use crate::generator::signature::leading;

/// File-level annotation, package and imports, written once before any stage.
pub const FILE_HEADER: &str = "@file:HideFromJava

package com.kamelia.sprinkler.binary.decoder.composer

import com.kamelia.sprinkler.binary.decoder.Decoder
import com.zwendo.restrikt.annotation.HideFromJava


";

/// Name of the accessor yielding the accumulated values in order inside `finally`.
pub const NEXT_ACCESSOR: &str = "next()";

/// Argument form accepted by a `then` overload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThenVariant {
    /// `nextDecoder: Decoder<R>`
    Direct,
    /// `nextDecoder: () -> Decoder<R>`
    Supplier,
}

impl ThenVariant {
    /// Emission order within a stage.
    pub const ALL: [ThenVariant; 2] = [ThenVariant::Direct, ThenVariant::Supplier];

    fn argument_type(self) -> &'static str {
        match self {
            ThenVariant::Direct => "Decoder<R>",
            ThenVariant::Supplier => "() -> Decoder<R>",
        }
    }
}

/// `sealed interface Contextk<...>` followed by a blank line.
pub fn interface_declaration(arity: usize, generics: &str) -> String {
    if arity == 0 {
        "sealed interface Context0\n\n".to_string()
    } else {
        format!("sealed interface Context{}<{}>\n\n", arity, generics)
    }
}

/// One `then` overload advancing `interface_type` to `next_interface_type`.
pub fn then_block(
    arity: usize,
    variant: ThenVariant,
    generics: &str,
    interface_type: &str,
    next_interface_type: &str,
) -> String {
    let mut block = format!("@JvmName(\"then{}\")\n", arity);
    block.push_str(&format!(
        "fun <T, {}R> DecoderComposer<T, {}>.then(nextDecoder: {})",
        leading(generics),
        interface_type,
        variant.argument_type()
    ));
    block.push_str(&format!(": DecoderComposer<R, {}> {{\n", next_interface_type));
    block.push_str("    val next = DecoderComposerUtils.thenDecoder(this, nextDecoder)\n");
    block.push_str("    return DecoderComposer.createFrom(this, next)\n");
    block.push_str("}\n\n");
    block
}

/// The `finally` function collapsing `interface_type` back to `Context0`.
pub fn finally_block(arity: usize, generics: &str, interface_type: &str) -> String {
    let lead = leading(generics);
    let accessors: String = (0..arity)
        .map(|_| format!("{}, ", NEXT_ACCESSOR))
        .collect();

    let mut block = format!("@JvmName(\"finally{}\")\n", arity);
    block.push_str(&format!(
        "fun <T, {}R> DecoderComposer<T, {}>.finally(block: ({}T) -> R)",
        lead, interface_type, lead
    ));
    block.push_str(": DecoderComposer<R, Context0> {\n");
    block.push_str("    val next = DecoderComposerUtils.finallyDecoder(this) {\n");
    block.push_str("        DecoderComposerUtils.ContextIterator(this).run {\n");
    block.push_str(&format!("           block({}it)\n", accessors));
    block.push_str("        }\n");
    block.push_str("   }\n");
    block.push_str("    return DecoderComposer.createFrom(this, next)\n");
    block.push_str("}\n\n");
    block
}
