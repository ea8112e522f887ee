//! The embedded production catalog: module registry and price tables.
//!
//! Prices are stored in cents (`Decimal` scale 2) per module per billing
//! cycle. Per-seat prices are per employee; fixed prices are flat per
//! cycle. The Enterprise plan offers a reduced module set — absent entries
//! mean the module cannot be purchased there.

use rust_decimal::Decimal;

use super::{Catalog, PriceTable};
use crate::domain::module::{Module, ModuleCategory, ModuleId, PricingKind};
use crate::domain::plan::{BillingCycle, Plan};
use crate::errors::CatalogError;

pub(crate) const BASE_MODULE: &str = "base-factorial";

const BUSINESS_MONTHLY: &[(&str, i64)] = &[
    ("base-factorial", 1030),
    ("controle-ponto", 285),
    ("gestao-ferias", 300),
    ("gestao-escalas", 285),
    ("gestao-projetos", 300),
    ("compensation", 300),
    ("pesquisas", 280),
    ("desempenho", 400),
    ("recrutamento", 47000),
    ("gestao-treinamentos", 280),
    ("lms", 399),
    ("gestao-despesas", 370),
    ("aprovisionamento", 25000),
    ("gestao-espacos", 160),
    ("gestao-software", 160),
    ("inventario-ti", 315),
    ("canal-seguro", 99),
];

const BUSINESS_YEARLY: &[(&str, i64)] = &[
    ("base-factorial", 950),
    ("controle-ponto", 255),
    ("gestao-ferias", 265),
    ("gestao-escalas", 255),
    ("gestao-projetos", 265),
    ("compensation", 300),
    ("pesquisas", 140),
    ("desempenho", 260),
    ("recrutamento", 42000),
    ("gestao-treinamentos", 140),
    ("lms", 359),
    ("gestao-despesas", 330),
    ("aprovisionamento", 22250),
    ("gestao-espacos", 140),
    ("gestao-software", 140),
    ("inventario-ti", 285),
    ("canal-seguro", 89),
];

const ENTERPRISE_MONTHLY: &[(&str, i64)] = &[
    ("base-factorial", 900),
    ("controle-ponto", 415),
    ("gestao-ferias", 430),
    ("gestao-escalas", 315),
    ("gestao-projetos", 430),
    ("compensation", 300),
    ("pesquisas", 500),
    ("desempenho", 420),
    ("recrutamento", 65000),
    ("gestao-treinamentos", 399),
    ("gestao-despesas", 485),
];

const ENTERPRISE_YEARLY: &[(&str, i64)] = &[
    ("base-factorial", 800),
    ("controle-ponto", 370),
    ("gestao-ferias", 385),
    ("gestao-escalas", 285),
    ("gestao-projetos", 385),
    ("compensation", 300),
    ("pesquisas", 450),
    ("desempenho", 375),
    ("recrutamento", 58000),
    ("gestao-treinamentos", 359),
    ("gestao-despesas", 430),
];

fn module(id: &str, name: &str, description: &str, pricing_kind: PricingKind) -> Module {
    Module {
        id: ModuleId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        pricing_kind,
    }
}

fn categories() -> Vec<ModuleCategory> {
    use PricingKind::{Fixed, PerSeat};

    vec![
        ModuleCategory {
            name: "Core".to_owned(),
            icon: "🏢".to_owned(),
            modules: vec![module(
                "base-factorial",
                "Base Factorial",
                "Plataforma core com folha de pagamento incluída",
                PerSeat,
            )],
        },
        ModuleCategory {
            name: "Gestão de Tempo".to_owned(),
            icon: "⏰".to_owned(),
            modules: vec![
                module(
                    "controle-ponto",
                    "Controle de Ponto",
                    "Gestão de presença e horas trabalhadas",
                    PerSeat,
                ),
                module(
                    "gestao-ferias",
                    "Gestão de Férias e Ausências",
                    "Controle de férias, licenças e ausências",
                    PerSeat,
                ),
                module(
                    "gestao-escalas",
                    "Gestão de Escalas",
                    "Planejamento e gestão de escalas de trabalho",
                    PerSeat,
                ),
                module(
                    "gestao-projetos",
                    "Gestão de Projetos",
                    "Controle de projetos e alocação de tempo",
                    PerSeat,
                ),
            ],
        },
        ModuleCategory {
            name: "People".to_owned(),
            icon: "👥".to_owned(),
            modules: vec![
                module(
                    "pesquisas",
                    "Pesquisas",
                    "Pesquisas de satisfação e clima organizacional",
                    PerSeat,
                ),
                module(
                    "desempenho",
                    "Desempenho",
                    "Avaliação de performance dos colaboradores",
                    PerSeat,
                ),
                module(
                    "recrutamento",
                    "Recrutamento e Seleção",
                    "Gestão completa do processo seletivo",
                    Fixed,
                ),
                module(
                    "gestao-treinamentos",
                    "Gestão de Treinamentos",
                    "Controle de treinamentos e desenvolvimento",
                    PerSeat,
                ),
                module(
                    "lms",
                    "LMS (Learning Management System)",
                    "Sistema de aprendizado online",
                    PerSeat,
                ),
            ],
        },
        ModuleCategory {
            name: "Finance".to_owned(),
            icon: "💰".to_owned(),
            modules: vec![
                module(
                    "gestao-despesas",
                    "Gestão de Despesas",
                    "Controle de gastos e reembolsos",
                    PerSeat,
                ),
                module(
                    "aprovisionamento",
                    "Aprovisionamento",
                    "Gestão de compras e fornecedores",
                    Fixed,
                ),
                module(
                    "compensation",
                    "Compensation",
                    "Gestão de salários e benefícios",
                    PerSeat,
                ),
            ],
        },
        ModuleCategory {
            name: "Office".to_owned(),
            icon: "🏢".to_owned(),
            modules: vec![
                module(
                    "gestao-espacos",
                    "Gestão de Espaços",
                    "Controle de escritórios e espaços físicos",
                    PerSeat,
                ),
                module(
                    "gestao-software",
                    "Gestão de Software",
                    "Inventário e licenças de software",
                    PerSeat,
                ),
                module(
                    "inventario-ti",
                    "Inventário de TI",
                    "Controle de equipamentos de tecnologia",
                    PerSeat,
                ),
                module(
                    "canal-seguro",
                    "Canal Seguro",
                    "Comunicação segura interna",
                    PerSeat,
                ),
            ],
        },
    ]
}

fn price_table() -> PriceTable {
    let mut prices = PriceTable::new();
    let tables = [
        (Plan::Business, BillingCycle::Monthly, BUSINESS_MONTHLY),
        (Plan::Business, BillingCycle::Yearly, BUSINESS_YEARLY),
        (Plan::Enterprise, BillingCycle::Monthly, ENTERPRISE_MONTHLY),
        (Plan::Enterprise, BillingCycle::Yearly, ENTERPRISE_YEARLY),
    ];

    for (plan, cycle, entries) in tables {
        for &(id, cents) in entries {
            prices.insert(plan, cycle, ModuleId::new(id), Decimal::new(cents, 2));
        }
    }

    prices
}

pub(crate) fn build() -> Result<Catalog, CatalogError> {
    Catalog::new(categories(), price_table(), ModuleId::new(BASE_MODULE))
}
