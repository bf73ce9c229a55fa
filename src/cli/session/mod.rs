//! Session commands

use clap::{Args, ValueEnum};

use super::Context;
use crate::domain::{
    validate_credentials, AuthMode, AuthUser, Credentials, Role, SessionResolution,
    ValidationErrors,
};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ModeArg {
    #[default]
    Login,
    Signup,
}

impl From<ModeArg> for AuthMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Login => AuthMode::Login,
            ModeArg::Signup => AuthMode::SignUp,
        }
    }
}

#[derive(Debug, Args)]
pub struct CredentialArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub password: String,

    #[arg(long, default_value_t = Role::User)]
    pub role: Role,
}

impl From<&CredentialArgs> for Credentials {
    fn from(args: &CredentialArgs) -> Self {
        Credentials::new(&args.name, &args.email, &args.password, args.role)
    }
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[arg(long, value_enum, default_value_t = ModeArg::Login)]
    pub mode: ModeArg,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Identifier assigned by the issuing service
    #[arg(long)]
    pub id: String,

    /// Bearer token assigned by the issuing service
    #[arg(long)]
    pub token: Option<String>,

    #[arg(long, value_enum, default_value_t = ModeArg::Login)]
    pub mode: ModeArg,
}

#[derive(Debug, Args)]
pub struct WhoamiArgs {
    /// Report the resolution outcome instead of falling back to the placeholder
    #[arg(long)]
    pub strict: bool,
}

fn check(credentials: &Credentials) -> anyhow::Result<()> {
    let errors = validate_credentials(credentials);
    if errors.is_valid() {
        return Ok(());
    }
    print_errors(&errors);
    anyhow::bail!("submission rejected: {} invalid field(s)", errors.len())
}

fn print_errors(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        println!("{}: {}", field, message);
    }
}

pub fn validate(args: ValidateArgs) -> anyhow::Result<()> {
    let credentials = Credentials::from(&args.credentials);
    check(&credentials)?;

    let mode = AuthMode::from(args.mode);
    println!("{}", mode.success_message(credentials.role));
    Ok(())
}

pub async fn login(ctx: &Context, args: LoginArgs) -> anyhow::Result<()> {
    let credentials = Credentials::from(&args.credentials);
    check(&credentials)?;

    let mut user = AuthUser::new(
        args.id,
        credentials.name.trim(),
        credentials.email.trim(),
        credentials.role,
    );
    user.token = args.token;

    ctx.session.save_user_data(&user).await?;
    println!("{}", AuthMode::from(args.mode).success_message(user.role));
    Ok(())
}

pub async fn whoami(ctx: &Context, args: WhoamiArgs) -> anyhow::Result<()> {
    if args.strict {
        match ctx.session.resolve_current_user().await {
            SessionResolution::Resolved { user, source } => {
                println!("{}", serde_json::to_string_pretty(&user)?);
                tracing::info!(?source, "Resolved session");
            }
            SessionResolution::Anonymous => println!("anonymous"),
            SessionResolution::Unresolved(reason) => println!("unresolved: {}", reason),
        }
        return Ok(());
    }

    match ctx.session.get_current_user().await {
        Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
        None => println!("anonymous"),
    }
    Ok(())
}

pub async fn status(ctx: &Context) -> anyhow::Result<()> {
    if ctx.session.is_authenticated().await {
        println!("authenticated");
    } else {
        println!("anonymous");
    }
    Ok(())
}

pub async fn token(ctx: &Context) -> anyhow::Result<()> {
    match ctx.session.get_auth_token().await {
        Some(token) => println!("{}", token),
        None => anyhow::bail!("no token stored"),
    }
    Ok(())
}

pub async fn logout(ctx: &Context) -> anyhow::Result<()> {
    let result = ctx.session.logout().await;
    if let Some(url) = ctx.navigator.last_redirect() {
        println!("{}", url);
    }
    Ok(result?)
}
