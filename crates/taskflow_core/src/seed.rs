//! Hardcoded sample tasks loaded when a task view initializes.
//!
//! Seed ids are deterministic (`00000000-0000-4000-8000-00000000000N`) so
//! callers can address sample tasks across runs.

use crate::model::task::{Priority, Task, TaskDraft, TaskId, TaskValidationError};
use chrono::NaiveDate;
use uuid::Uuid;

const SEED_ID_BASE: u128 = 0x0000_0000_0000_4000_8000_0000_0000_0000;

struct SampleTask {
    title: &'static str,
    description: &'static str,
    completed: bool,
    priority: Priority,
    due: (i32, u32, u32),
    created: (i32, u32, u32),
}

const SAMPLE_TASKS: [SampleTask; 8] = [
    SampleTask {
        title: "Terminer le rapport mensuel",
        description: "Finaliser le rapport de performance du mois de décembre avec les métriques clés",
        completed: false,
        priority: Priority::High,
        due: (2024, 1, 15),
        created: (2024, 1, 10),
    },
    SampleTask {
        title: "Préparer la présentation client",
        description: "Créer les slides pour la présentation du nouveau produit au client ABC",
        completed: false,
        priority: Priority::High,
        due: (2024, 1, 14),
        created: (2024, 1, 9),
    },
    SampleTask {
        title: "Réviser le code de l'API",
        description: "Code review des nouvelles fonctionnalités de l'API utilisateur",
        completed: true,
        priority: Priority::Medium,
        due: (2024, 1, 13),
        created: (2024, 1, 8),
    },
    SampleTask {
        title: "Organiser la réunion équipe",
        description: "Planifier et organiser la réunion hebdomadaire de l'équipe développement",
        completed: false,
        priority: Priority::Medium,
        due: (2024, 1, 16),
        created: (2024, 1, 11),
    },
    SampleTask {
        title: "Mettre à jour la documentation",
        description: "Actualiser la documentation technique du projet avec les dernières modifications",
        completed: false,
        priority: Priority::Low,
        due: (2024, 1, 20),
        created: (2024, 1, 12),
    },
    SampleTask {
        title: "Tester les nouvelles fonctionnalités",
        description: "Tests complets des fonctionnalités développées cette semaine",
        completed: true,
        priority: Priority::High,
        due: (2024, 1, 12),
        created: (2024, 1, 7),
    },
    SampleTask {
        title: "Optimiser les performances",
        description: "Analyser et améliorer les performances de l'application web",
        completed: false,
        priority: Priority::Medium,
        due: (2024, 1, 18),
        created: (2024, 1, 10),
    },
    SampleTask {
        title: "Backup des données",
        description: "Effectuer la sauvegarde mensuelle de toutes les données critiques",
        completed: true,
        priority: Priority::Low,
        due: (2024, 1, 11),
        created: (2024, 1, 6),
    },
];

/// Id of the `n`-th sample task, 1-based.
pub fn sample_task_id(n: u8) -> TaskId {
    Uuid::from_u128(SEED_ID_BASE | u128::from(n))
}

/// The eight sample tasks in display order.
pub fn sample_tasks() -> Result<Vec<Task>, TaskValidationError> {
    SAMPLE_TASKS
        .iter()
        .zip(1u8..)
        .map(|(sample, n)| -> Result<Task, TaskValidationError> {
            let draft = TaskDraft::new(sample.title)
                .description(sample.description)
                .priority(sample.priority)
                .due_date(seed_date("due date", sample.due)?);
            let created = seed_date("created date", sample.created)?;

            let mut task = Task::with_id(sample_task_id(n), draft, created)?;
            task.completed = sample.completed;
            Ok(task)
        })
        .collect()
}

fn seed_date(
    field: &'static str,
    (year, month, day): (i32, u32, u32),
) -> Result<NaiveDate, TaskValidationError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| TaskValidationError::InvalidDate {
        field,
        value: format!("{year:04}-{month:02}-{day:02}"),
    })
}
