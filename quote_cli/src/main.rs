//! # Quoting CLI
//!
//! Terminal front end for the pricing engine. Prompts for a format,
//! template, and options, then prints the client-facing summary, the
//! production breakdown, and the raw JSON an API caller would receive.
//!
//! Runs against the built-in sample catalog; a host application would
//! load its own snapshot instead.

use std::io::{self, BufRead, Write};

use quote_core::catalog::{sample_catalog, CatalogSnapshot, ComponentKind, TemplateComponent};
use quote_core::{calculate, CalculationRequest, CalculationResult};
use rust_decimal::Decimal;

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }
    Some(input.trim().to_string())
}

fn prompt_decimal(prompt: &str, default: Decimal) -> Decimal {
    match prompt_line(prompt) {
        Some(input) => input.parse().unwrap_or(default),
        None => default,
    }
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    match prompt_line(prompt) {
        Some(input) => input.parse().unwrap_or(default),
        None => default,
    }
}

fn prompt_optional_decimal(prompt: &str) -> Option<Decimal> {
    prompt_line(prompt).and_then(|input| input.parse().ok())
}

fn prompt_yes(prompt: &str) -> bool {
    match prompt_line(prompt) {
        Some(input) => matches!(input.as_str(), "y" | "Y" | "yes"),
        None => false,
    }
}

/// Label an optional component for the selection prompt.
fn option_label(catalog: &CatalogSnapshot, component: &TemplateComponent) -> String {
    if let Some(label) = &component.option_label {
        return label.clone();
    }
    match component.kind {
        ComponentKind::Material { material_id } => catalog
            .material(material_id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|_| format!("Material #{}", material_id)),
        ComponentKind::Process { process_id } => catalog
            .process(process_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|_| format!("Process #{}", process_id)),
    }
}

fn print_result(result: &CalculationResult) {
    println!("═══════════════════════════════════════");
    println!("  QUOTE BREAKDOWN");
    println!("═══════════════════════════════════════");
    println!();
    println!("Format:");
    println!(
        "  Gross:   {} x {} cm",
        result.gross_dimensions.width_cm, result.gross_dimensions.height_cm
    );
    println!(
        "  Panels:  {} ({}), overlap {} cm",
        result.num_panels,
        if result.is_split { "split" } else { "single" },
        result.overlap_used_cm
    );
    println!();

    println!("Client view:");
    for line in &result.client_view {
        println!(
            "  {} x{}  =  {:.2}",
            line.description, line.quantity, line.total_net
        );
    }
    println!();

    println!("Production view:");
    for line in &result.tech_view {
        let optional = if line.is_optional { " (optional)" } else { "" };
        let price = format!("{:.2}", line.price_net);
        println!(
            "  {:30} {:>10} {:4} {:>10}{}",
            line.name,
            line.quantity.to_string(),
            line.unit,
            price,
            optional
        );
        println!("      {}", line.details);
    }
    println!();

    println!("Totals:");
    println!("  Cost (COGS):  {:.2}", result.total_cost_cogs);
    println!("  Price (net):  {:.2}", result.total_price_net);
    println!("  Margin:       {}%", result.margin_percentage);
}

fn main() {
    println!("Rollfit CLI - Wide-Format Print Quoting");
    println!("=======================================");
    println!();

    let catalog = sample_catalog();

    println!("Templates in the sample catalog:");
    let mut template_ids: Vec<u32> = catalog.templates.keys().copied().collect();
    template_ids.sort_unstable();
    for id in &template_ids {
        if let Ok(template) = catalog.template(*id) {
            println!(
                "  {} - {} ({} components)",
                template.id,
                template.name,
                template.components.len()
            );
        }
    }
    println!("  0 - no template (geometry only)");
    println!();

    let width_cm = prompt_decimal("Net width (cm) [120]: ", Decimal::from(120));
    let height_cm = prompt_decimal("Net height (cm) [80]: ", Decimal::from(80));
    let quantity = prompt_u32("Quantity [1]: ", 1);
    let template_id = prompt_u32("Template id [1]: ", 1);

    let mut request = CalculationRequest::new(width_cm, height_cm, quantity);
    if template_id != 0 {
        request = request.with_template(template_id);
        if let Ok(template) = catalog.template(template_id) {
            for component in &template.components {
                if component.is_required {
                    continue;
                }
                let label = option_label(&catalog, component);
                if prompt_yes(&format!("Include option '{}'? [y/N]: ", label)) {
                    request = request.with_selected_option(component.id);
                }
            }
        }
    }
    if let Some(overlap) = prompt_optional_decimal("Overlap override (cm, empty = default): ") {
        request = request.with_overlap_override(overlap);
    }

    println!();
    match calculate(&catalog, &request) {
        Ok(result) => {
            print_result(&result);
            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Code: {}", e.error_code());
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
