use crate::infra::{load_catalog, sample_plans};
use clap::Args;
use plan_finder::config::AppConfig;
use plan_finder::error::AppError;
use plan_finder::telemetry;
use plan_finder::workflows::catalog::{Catalog, LimitKind};
use plan_finder::workflows::selection::{
    FieldInput, FormController, FormField, HttpPlansApi, PlanRecord, PlansApi, StaticPlansApi,
    SubmissionOutcome, ValidationReport,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Load options from a CSV export (kind,amount,label) instead of the configured catalog
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuoteArgs {
    /// Age of the principal applicant
    #[arg(long)]
    pub(crate) age: Option<String>,
    /// Inpatient care limit, e.g. 500000
    #[arg(long)]
    pub(crate) inpatient_limit: Option<String>,
    /// Outpatient limit (required with --dental)
    #[arg(long)]
    pub(crate) outpatient_limit: Option<String>,
    /// Include a spouse of the given age
    #[arg(long)]
    pub(crate) spouse_age: Option<String>,
    /// Include the given number of under-18 children
    #[arg(long)]
    pub(crate) children: Option<String>,
    /// Add the maternity rider
    #[arg(long)]
    pub(crate) maternity: bool,
    /// Add the dental rider (optical is bundled automatically)
    #[arg(long)]
    pub(crate) dental: bool,
    /// Answer from built-in sample plans instead of the remote plans API
    #[arg(long)]
    pub(crate) offline: bool,
    /// Load limit options from a CSV export
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(args.csv.as_deref(), &config.plans)?;
    for line in render_catalog(&catalog) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) async fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let catalog = load_catalog(args.csv.as_deref(), &config.plans)?;
    let mut form = FormController::new(catalog);
    apply_quote_args(&mut form, &args);

    let outcome = if args.offline {
        let api = StaticPlansApi::new(sample_plans());
        submit(&mut form, &api).await?
    } else {
        let api = HttpPlansApi::new(config.plans.api_url.clone())?;
        submit(&mut form, &api).await?
    };

    match outcome {
        SubmissionOutcome::Rejected(report) => {
            println!("Selection needs attention");
            for line in render_report(&report) {
                println!("{line}");
            }
        }
        SubmissionOutcome::Matched(result) => {
            println!("Query: {}", result.query);
            if result.plans.is_empty() {
                println!("No plans matched this selection");
            } else {
                println!("Matching plans");
                for plan in &result.plans {
                    println!("{}", render_plan(plan));
                }
            }
        }
    }

    Ok(())
}

async fn submit<P: PlansApi>(
    form: &mut FormController,
    api: &P,
) -> Result<SubmissionOutcome, AppError> {
    Ok(form.submit(api).await?)
}

/// Replays the flags as the edits a user would make on the form.
fn apply_quote_args(form: &mut FormController, args: &QuoteArgs) {
    if let Some(age) = &args.age {
        form.apply_edit(FormField::PrincipalAge, FieldInput::Number(age.clone()));
    }
    if let Some(limit) = &args.inpatient_limit {
        form.apply_edit(FormField::InpatientLimit, FieldInput::Select(limit.clone()));
    }
    if let Some(limit) = &args.outpatient_limit {
        form.apply_edit(FormField::OutpatientLimit, FieldInput::Select(limit.clone()));
    }
    if let Some(age) = &args.spouse_age {
        form.apply_edit(FormField::IncludeSpouse, FieldInput::Checkbox(true));
        form.apply_edit(FormField::SpouseAge, FieldInput::Number(age.clone()));
    }
    if let Some(count) = &args.children {
        form.apply_edit(FormField::IncludeChildren, FieldInput::Checkbox(true));
        form.apply_edit(FormField::NumberOfChildren, FieldInput::Number(count.clone()));
    }
    if args.maternity {
        form.apply_edit(FormField::Maternity, FieldInput::Select("Yes".to_string()));
    }
    if args.dental {
        form.apply_edit(FormField::Dental, FieldInput::Select("Yes".to_string()));
    }
}

fn render_catalog(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();
    for (title, kind) in [
        ("Inpatient care limits", LimitKind::Inpatient),
        ("Outpatient limits", LimitKind::Outpatient),
    ] {
        lines.push(title.to_string());
        for option in catalog.options(kind) {
            lines.push(format!("- {} ({})", option.label, option.amount));
        }
    }
    lines
}

fn render_report(report: &ValidationReport) -> Vec<String> {
    report
        .by_field()
        .into_iter()
        .flat_map(|(field, messages)| {
            messages
                .into_iter()
                .map(move |message| format!("- {field}: {message}"))
        })
        .collect()
}

fn render_plan(plan: &PlanRecord) -> String {
    let mut line = format!(
        "- {} - {}: inpatient Kshs {}, premium Kshs {:.2}",
        plan.company_name, plan.plan_name, plan.inpatient_cover, plan.annual_premium
    );
    if let Some(outpatient) = plan.outpatient_cover {
        line.push_str(&format!(", outpatient Kshs {outpatient}"));
    }
    let riders: Vec<&str> = [
        (plan.include_maternity, "maternity"),
        (plan.include_dental, "dental"),
        (plan.include_optical, "optical"),
    ]
    .into_iter()
    .filter_map(|(included, name)| included.then_some(name))
    .collect();
    if !riders.is_empty() {
        line.push_str(&format!(" [{}]", riders.join(", ")));
    }
    line
}
