//! # taskdeck-cli
//!
//! Administration CLI for the taskdeck backend: list, inspect, create,
//! update and delete tasks and their lifecycle states.
//!
//! Configuration comes from the environment: `TASKDECK_API_URL` (defaults to
//! the local development backend), `TASKDECK_API_USER` and
//! `TASKDECK_API_PASSWORD`.

use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use taskdeck_client::{ApiConfig, HttpAuthenticator, StateApi, TaskApi, TokenProvider};
use taskdeck_core::{NewState, NewTask, SortOrder, TaskUpdate, ValidationError};
use taskdeck_store::{StateStore, TaskStore, TasksState};

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "taskdeck - Administra tareas y estados del backend", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Operaciones sobre tareas
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },

    /// Operaciones sobre estados
    State {
        #[command(subcommand)]
        command: StateCommands,
    },
}

#[derive(Subcommand)]
enum TaskCommands {
    /// Lista tareas con búsqueda, filtro, orden y paginación
    List {
        /// Texto a buscar en título y descripción
        #[arg(short, long)]
        search: Option<String>,

        /// Filtra por estado
        #[arg(long)]
        state_id: Option<i64>,

        /// Orden por fecha de vencimiento
        #[arg(long, value_enum, default_value_t = OrderArg::Asc)]
        order_by: OrderArg,

        /// Número de página (empieza en 1)
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },

    /// Muestra una tarea
    Get {
        id: i64,
    },

    /// Crea una tarea
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Fecha de vencimiento (YYYY-MM-DD o ISO-8601)
        #[arg(long)]
        due_date: String,

        #[arg(long)]
        state_id: i64,
    },

    /// Actualiza una tarea existente
    Update {
        id: i64,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Fecha de vencimiento (YYYY-MM-DD o ISO-8601)
        #[arg(long)]
        due_date: String,

        #[arg(long)]
        state_id: i64,
    },

    /// Elimina una tarea
    Delete {
        id: i64,

        /// No pedir confirmación
        #[arg(long)]
        yes: bool,
    },

    /// Lista los estados disponibles para el formulario de tareas
    States,
}

#[derive(Subcommand)]
enum StateCommands {
    /// Lista todos los estados
    List,

    /// Muestra un estado
    Get {
        id: i64,
    },

    /// Crea un estado
    Create {
        #[arg(long)]
        name: String,

        /// Crear el estado como inactivo
        #[arg(long)]
        inactive: bool,
    },

    /// Actualiza un estado existente
    Update {
        id: i64,

        #[arg(long)]
        name: String,

        #[arg(long)]
        inactive: bool,
    },

    /// Elimina un estado
    Delete {
        id: i64,

        /// No pedir confirmación
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    /// Vencimiento más próximo primero
    Asc,
    /// Vencimiento más lejano primero
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::DueDateAsc,
            OrderArg::Desc => SortOrder::DueDateDesc,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(rust_log).init();

    let cli = Cli::parse();
    let (tasks, states) = build_stores()?;

    match cli.command {
        Commands::Task { command } => run_task(command, &tasks).await,
        Commands::State { command } => run_state(command, &states).await,
    }
}

fn build_stores() -> anyhow::Result<(TaskStore, StateStore)> {
    let config = ApiConfig::from_env()?;
    tracing::debug!(base_url = %config.base_url, "configuración cargada");

    let tokens = Arc::new(TokenProvider::new(
        Arc::new(HttpAuthenticator::new(config.clone())),
        config.token_ttl,
    ));

    let tasks = TaskStore::new(Arc::new(TaskApi::new(config.clone(), tokens.clone())));
    let states = StateStore::new(Arc::new(StateApi::new(config, tokens)));
    Ok((tasks, states))
}

async fn run_task(command: TaskCommands, store: &TaskStore) -> anyhow::Result<()> {
    match command {
        TaskCommands::List {
            search,
            state_id,
            order_by,
            page,
            page_size,
        } => {
            if let Some(search) = search {
                store.set_search(search);
            }
            if state_id.is_some() {
                store.set_state_filter(state_id);
            }
            store.set_order_by(order_by.into());
            store.set_page_size(page_size);
            store.set_page_number(page);

            dispatch(store.fetch_tasks().await)?;
            print_task_list(&store.state());
        }
        TaskCommands::Get { id } => {
            dispatch(store.fetch_task(id).await)?;
            if let Some(task) = store.state().selected {
                print_task_detail(&task);
            }
        }
        TaskCommands::Create {
            title,
            description,
            due_date,
            state_id,
        } => {
            let draft = NewTask {
                title,
                description,
                due_date,
                state_id,
            };
            ensure_valid(draft.validate())?;

            dispatch(store.create_task(&draft).await)?;
            println!("Operación exitosa");
            print_task_list(&store.state());
        }
        TaskCommands::Update {
            id,
            title,
            description,
            due_date,
            state_id,
        } => {
            let update = TaskUpdate {
                id,
                title,
                description,
                due_date,
                state_id,
            };
            ensure_valid(update.validate())?;

            dispatch(store.update_task(&update).await)?;
            println!("Operación exitosa");
            print_task_list(&store.state());
        }
        TaskCommands::Delete { id, yes } => {
            if !yes && !confirm(&format!("¿Eliminar la tarea {id}?")) {
                println!("Cancelado");
                return Ok(());
            }

            dispatch(store.delete_task(id).await)?;
            println!("Operación exitosa");
            print_task_list(&store.state());
        }
        TaskCommands::States => {
            dispatch(store.fetch_task_states().await)?;
            for state in &store.state().available_states {
                println!("{:>4}  {}", state.id, state.name);
            }
        }
    }

    Ok(())
}

async fn run_state(command: StateCommands, store: &StateStore) -> anyhow::Result<()> {
    match command {
        StateCommands::List => {
            dispatch(store.fetch_states().await)?;
            print_state_list(&store.state().items);
        }
        StateCommands::Get { id } => {
            dispatch(store.fetch_state(id).await)?;
            if let Some(state) = store.state().selected {
                println!("Id:     {}", state.id);
                println!("Nombre: {}", state.name);
                println!("Activo: {}", if state.is_active { "sí" } else { "no" });
            }
        }
        StateCommands::Create { name, inactive } => {
            let draft = NewState {
                name,
                is_active: !inactive,
            };
            ensure_valid(draft.validate())?;

            dispatch(store.create_state(&draft).await)?;
            println!("Operación exitosa");
            print_state_list(&store.state().items);
        }
        StateCommands::Update { id, name, inactive } => {
            let draft = NewState {
                name,
                is_active: !inactive,
            };
            ensure_valid(draft.validate())?;

            dispatch(store.update_state(id, &draft).await)?;
            println!("Operación exitosa");
            print_state_list(&store.state().items);
        }
        StateCommands::Delete { id, yes } => {
            if !yes && !confirm(&format!("¿Eliminar el estado {id}?")) {
                println!("Cancelado");
                return Ok(());
            }

            dispatch(store.delete_state(id).await)?;
            println!("Operación exitosa");
            print_state_list(&store.state().items);
        }
    }

    Ok(())
}

/// Turn a store failure into a process-level error. The store has already
/// recorded the message in its `error` field.
fn dispatch(result: Result<(), taskdeck_store::StoreError>) -> anyhow::Result<()> {
    result.map_err(|err| anyhow::anyhow!("{err}"))
}

/// Per-field validation messages go to stderr; nothing was sent upstream.
fn ensure_valid(result: Result<(), Vec<ValidationError>>) -> anyhow::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(errors) => {
            for error in &errors {
                eprintln!("  {error}");
            }
            anyhow::bail!("la operación no pasó la validación")
        }
    }
}

fn confirm(prompt: &str) -> bool {
    use std::io::Write;

    print!("{prompt} (s/N): ");
    std::io::stdout().flush().ok();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    matches!(input.trim(), "s" | "S" | "si" | "sí")
}

fn print_task_list(state: &TasksState) {
    println!(
        "{:<5} {:<36} {:<12} {:<16}",
        "ID", "TÍTULO", "VENCE", "ESTADO"
    );
    for task in &state.items {
        let state_name = task
            .state_name
            .clone()
            .unwrap_or_else(|| task.state_id.to_string());
        println!(
            "{:<5} {:<36} {:<12} {:<16}",
            task.id,
            clip(&task.title, 36),
            clip(&task.due_date, 10),
            clip(&state_name, 16)
        );
    }

    let pagination = &state.pagination;
    let page_size = u64::from(pagination.page_size.max(1));
    let total_pages = (pagination.total_count.max(1) + page_size - 1) / page_size;
    println!(
        "Página {} de {} ({} tareas)",
        pagination.page_number, total_pages, pagination.total_count
    );
}

fn print_task_detail(task: &taskdeck_core::Task) {
    println!("Id:          {}", task.id);
    println!("Título:      {}", task.title);
    println!("Descripción: {}", task.description);
    println!("Vence:       {}", task.due_date);
    println!(
        "Estado:      {}",
        task.state_name.as_deref().unwrap_or("-")
    );
    println!("Creada:      {}", task.created_at);
    println!("Actualizada: {}", task.updated_at);
}

fn print_state_list(states: &[taskdeck_core::TaskState]) {
    println!("{:<5} {:<24} {}", "ID", "NOMBRE", "ACTIVO");
    for state in states {
        println!(
            "{:<5} {:<24} {}",
            state.id,
            clip(&state.name, 24),
            if state.is_active { "sí" } else { "no" }
        );
    }
}

/// Truncate to at most `max` characters, safe on multi-byte text.
fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
