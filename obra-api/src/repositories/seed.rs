//! Demo records loaded when `application.seed_demo_data` is set.

use std::collections::HashMap;

use time::macros::date;

use super::SiteData;
use crate::domain::models::{
    CostCurvePoint, DailyLog, DailyLogId, Equipment, EquipmentId, EquipmentStatus, Expense,
    ExpenseCategory, ExpenseId, Material, MaterialId, PaymentStatus, Project, ProjectId,
    ProjectStatus, Stage, StageStatus, Supplier, SupplierId, Weather, Worker, WorkerId,
    WorkerStatus, WorkerType,
};

pub fn demo_data() -> SiteData {
    let mut cost_curves = HashMap::new();
    cost_curves.insert(
        ProjectId::new("1"),
        vec![
            CostCurvePoint::new("Set", 50_000.0, 48_000.0),
            CostCurvePoint::new("Out", 120_000.0, 115_000.0),
            CostCurvePoint::new("Nov", 200_000.0, 210_000.0),
            CostCurvePoint::new("Dez", 280_000.0, 295_000.0),
            CostCurvePoint::new("Jan", 350_000.0, 340_000.0),
            CostCurvePoint::new("Fev", 450_000.0, 480_000.0),
        ],
    );

    SiteData {
        projects: projects(),
        expenses: expenses(),
        materials: materials(),
        workers: workers(),
        equipment: equipment(),
        daily_logs: daily_logs(),
        suppliers: suppliers(),
        cost_curves,
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::new("1"),
            name: "Residencial Altos do Lago".to_string(),
            client: "Construtora Horizonte".to_string(),
            status: ProjectStatus::Active,
            progress: 65,
            budget_total: 1_500_000.0,
            budget_spent: 980_000.0,
            start_date: date!(2023 - 08 - 01),
            end_date: Some(date!(2024 - 05 - 30)),
            address: "Rua das Palmeiras, 123 - Lago Norte".to_string(),
            area: 450.0,
            bdi: 22.5,
            stages: vec![
                Stage::new("s1", "Fundação", StageStatus::Completed, 100),
                Stage::new("s2", "Estrutura", StageStatus::Completed, 100),
                Stage::new("s3", "Alvenaria", StageStatus::InProgress, 85),
                Stage::new("s4", "Instalações", StageStatus::InProgress, 40),
                Stage::new("s5", "Acabamento", StageStatus::Pending, 0),
            ],
        },
        Project {
            id: ProjectId::new("2"),
            name: "Reforma Comercial Centro".to_string(),
            client: "Silva & Associados".to_string(),
            status: ProjectStatus::Planning,
            progress: 10,
            budget_total: 350_000.0,
            budget_spent: 15_000.0,
            start_date: date!(2024 - 01 - 15),
            end_date: Some(date!(2024 - 04 - 15)),
            address: "Av. Paulista, 1000 - CJ 42".to_string(),
            area: 120.0,
            bdi: 18.0,
            stages: vec![
                Stage::new("s1", "Demolição", StageStatus::Completed, 100),
                Stage::new("s2", "Drywall", StageStatus::Pending, 0),
            ],
        },
    ]
}

fn expense(
    id: &str,
    description: &str,
    category: ExpenseCategory,
    amount: f64,
    date: time::Date,
    status: PaymentStatus,
    supplier_id: Option<&str>,
) -> Expense {
    Expense {
        id: ExpenseId::new(id),
        description: description.to_string(),
        category,
        amount,
        date,
        project_id: ProjectId::new("1"),
        status,
        supplier_id: supplier_id.map(SupplierId::new),
    }
}

fn expenses() -> Vec<Expense> {
    use ExpenseCategory::*;
    use PaymentStatus::{Paid, Pending};

    vec![
        expense("1", "Concreto Usinado FCK 30", Material, 15_000.0, date!(2024 - 02 - 10), Paid, Some("sup1")),
        expense("2", "Mão de Obra - Pedreiros (Quinzena)", Labor, 12_500.0, date!(2024 - 02 - 15), Paid, None),
        expense("3", "Aluguel Betoneira", Equipment, 800.0, date!(2024 - 02 - 12), Pending, Some("sup2")),
        expense("4", "Aço CA-50 10mm", Material, 8_900.0, date!(2024 - 02 - 05), Paid, Some("sup1")),
        expense("5", "Licença Prefeitura", Permits, 2_500.0, date!(2024 - 01 - 20), Paid, None),
        expense("6", "Tijolo Cerâmico 8 furos", Material, 4_500.0, date!(2024 - 02 - 18), Pending, Some("sup3")),
        expense("7", "Administração Local", Indirect, 3_500.0, date!(2024 - 02 - 01), Paid, None),
    ]
}

#[allow(clippy::too_many_arguments)]
fn material(
    id: &str,
    name: &str,
    unit: &str,
    quantity_total: f64,
    quantity_used: f64,
    cost_per_unit: f64,
    category: &str,
    min_threshold: f64,
    supplier_id: &str,
    waste: f64,
) -> Material {
    Material {
        id: MaterialId::new(id),
        name: name.to_string(),
        unit: unit.to_string(),
        quantity_total,
        quantity_used,
        cost_per_unit,
        category: category.to_string(),
        project_id: ProjectId::new("1"),
        min_threshold,
        waste,
        supplier_id: Some(SupplierId::new(supplier_id)),
    }
}

fn materials() -> Vec<Material> {
    vec![
        material("1", "Cimento CP-II", "Sacos (50kg)", 1000.0, 650.0, 35.0, "Estrutura", 100.0, "sup1", 12.0),
        material("2", "Areia Média", "m³", 150.0, 90.0, 120.0, "Estrutura", 20.0, "sup2", 5.0),
        material("3", "Tijolo 6 Furos", "milheiro", 20.0, 12.0, 850.0, "Alvenaria", 5.0, "sup3", 0.5),
        material("4", "Porcelanato 80x80", "m²", 300.0, 0.0, 110.0, "Acabamento", 300.0, "sup4", 0.0),
        material("5", "Tinta Acrílica Branco", "Lata 18L", 40.0, 5.0, 350.0, "Pintura", 10.0, "sup4", 0.0),
    ]
}

fn daily_logs() -> Vec<DailyLog> {
    vec![
        DailyLog {
            id: DailyLogId::new("d1"),
            date: date!(2024 - 02 - 20),
            project_id: ProjectId::new("1"),
            weather: Weather::Sunny,
            notes: "Início da alvenaria no 2º pavimento. Entrega de tijolos confirmada.".to_string(),
            activities: vec![
                "Levantamento de parede eixo X".to_string(),
                "Cura do concreto laje 1".to_string(),
                "Limpeza do canteiro".to_string(),
            ],
            workforce_count: 12,
            waste_reported: Some("Quebra de 15 blocos cerâmicos no transporte".to_string()),
        },
        DailyLog {
            id: DailyLogId::new("d2"),
            date: date!(2024 - 02 - 19),
            project_id: ProjectId::new("1"),
            weather: Weather::Rainy,
            notes: "Chuva intensa pela manhã paralisou atividades externas.".to_string(),
            activities: vec![
                "Organização do almoxarifado".to_string(),
                "Instalações elétricas internas".to_string(),
            ],
            workforce_count: 10,
            waste_reported: None,
        },
    ]
}

fn workers() -> Vec<Worker> {
    let worker = |id: &str, name: &str, role: &str, rate: f64, worker_type| Worker {
        id: WorkerId::new(id),
        name: name.to_string(),
        role: role.to_string(),
        rate,
        worker_type,
        status: WorkerStatus::Active,
    };

    vec![
        worker("w1", "Carlos Santos", "Mestre de Obras", 250.0, WorkerType::Employee),
        worker("w2", "João Silva", "Pedreiro", 180.0, WorkerType::Contractor),
        worker("w3", "Pedro Souza", "Servente", 100.0, WorkerType::Contractor),
    ]
}

fn equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: EquipmentId::new("e1"),
            name: "Betoneira 400L".to_string(),
            status: EquipmentStatus::InUse,
            cost_per_day: 50.0,
            assigned_to: Some(ProjectId::new("1")),
        },
        Equipment {
            id: EquipmentId::new("e2"),
            name: "Martelete Rompedor".to_string(),
            status: EquipmentStatus::Available,
            cost_per_day: 80.0,
            assigned_to: None,
        },
        Equipment {
            id: EquipmentId::new("e3"),
            name: "Andaime Tubular (Kit)".to_string(),
            status: EquipmentStatus::InUse,
            cost_per_day: 25.0,
            assigned_to: Some(ProjectId::new("1")),
        },
    ]
}

fn suppliers() -> Vec<Supplier> {
    let supplier = |id: &str, name: &str, category: &str, rating: f64| Supplier {
        id: SupplierId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        rating,
    };

    vec![
        supplier("sup1", "Casa do Construtor", "Material Básico", 4.5),
        supplier("sup2", "LocaTudo Equipamentos", "Locação", 4.0),
        supplier("sup3", "Olaria Regional", "Alvenaria", 3.5),
    ]
}
