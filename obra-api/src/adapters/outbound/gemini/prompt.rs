use gemini::Schema;
use itertools::Itertools;

use crate::domain::models::ProjectSnapshot;

/// Prompt asking for an audit of the project's costs, material use and schedule.
pub fn health_prompt(snapshot: &ProjectSnapshot) -> String {
    let project = &snapshot.project;

    let expenses = snapshot
        .expenses
        .iter()
        .map(|e| format!("{}: R$ {} ({})", e.category, e.amount, e.description))
        .join("\n");
    let materials = snapshot
        .materials
        .iter()
        .map(|m| {
            format!(
                "{}: Usado {}/{} {} (Custo Médio: R$ {}, Desperdício: {} {})",
                m.name, m.quantity_used, m.quantity_total, m.unit, m.cost_per_unit, m.waste, m.unit
            )
        })
        .join("\n");

    format!(
        "Atue como um auditor sênior de engenharia civil e gestor de obras. \
Analise os dados do projeto abaixo e forneça um relatório JSON estruturado.

DADOS DO PROJETO:
Nome: {name}
Orçamento Total: R$ {budget_total}
Gasto Atual: R$ {budget_spent}
Progresso Físico: {progress}%
Status: {status}
BDI: {bdi}%

DESPESAS RECENTES:
{expenses}

USO DE MATERIAIS:
{materials}

TAREFA:
Analise a eficiência de custos, possíveis desperdícios de materiais e riscos de cronograma.
Retorne a resposta EXATAMENTE no formato JSON solicitado.",
        name = project.name,
        budget_total = project.budget_total,
        budget_spent = project.budget_spent,
        progress = project.progress,
        status = project.status,
        bdi = project.bdi,
    )
}

/// Response schema; every field is required.
pub fn health_report_schema() -> Schema {
    Schema::object()
        .with_required_property(
            "summary",
            Schema::string().with_description(
                "Resumo executivo da saúde financeira e física da obra (máx 3 frases).",
            ),
        )
        .with_required_property(
            "risks",
            Schema::array_of(Schema::string())
                .with_description("Lista de 3 riscos principais identificados."),
        )
        .with_required_property(
            "recommendations",
            Schema::array_of(Schema::string())
                .with_description("3 ações corretivas recomendadas."),
        )
        .with_required_property(
            "savingsPotential",
            Schema::string().with_description("Estimativa de onde economizar."),
        )
}
