use reqwest::Method;

use backoffice_core::{Admin, AdminCreate, AdminUpdate, Record};

use super::http::{by_name_path, list_path, toggle_status_path};
use crate::cli_args::*;
use crate::modules::auth::RequestOptions;
use crate::modules::shared::{check_name_exists, print_delete, print_view, ResourceController};
use crate::modules::system::http::{expect_response, print_json_response};
use crate::modules::system::CommandContext;
use crate::prompt_password;

pub(crate) async fn handle_admin(
    args: AdminArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        AdminCommand::List(args) => {
            let mut controller =
                ResourceController::<Admin>::new(&mut ctx.session).with_format(args.format);
            print_view(controller.load_from(&list_path(args.enabled_only)).await?)?;
        }
        AdminCommand::Get(args) => {
            let mut controller =
                ResourceController::<Admin>::new(&mut ctx.session).with_format(args.format);
            print_view(controller.get_item(args.id).await?)?;
        }
        AdminCommand::GetByName(args) => {
            let mut controller =
                ResourceController::<Admin>::new(&mut ctx.session).with_format(args.format);
            let view = controller
                .apply_one(
                    &by_name_path(&args.name),
                    RequestOptions::get(),
                    "Looking up admin",
                )
                .await?;
            print_view(view)?;
        }
        AdminCommand::Create(args) => {
            let password = match args.password {
                Some(password) => password,
                None => prompt_password("Password for new admin: ")?,
            };
            let payload = AdminCreate {
                name: args.name,
                email: args.email,
                password,
                enabled: !args.disabled,
                roles: args.roles,
            };
            let mut controller = ResourceController::<Admin>::new(&mut ctx.session);
            let outcome = controller.create_item(&payload).await?;
            print_json_response(expect_response(outcome)?).await?;
        }
        AdminCommand::Update(args) => {
            let payload = AdminUpdate {
                email: args.email,
                password: args.password,
                enabled: args.enabled,
            };
            if payload.is_empty() {
                anyhow::bail!("nothing to update");
            }
            let mut controller = ResourceController::<Admin>::new(&mut ctx.session);
            let outcome = controller.update_item(args.id, &payload).await?;
            print_json_response(expect_response(outcome)?).await?;
        }
        AdminCommand::Delete(args) => {
            let prompt = format!("Delete {} {}?", Admin::KIND.singular(), args.id);
            let mut controller = ResourceController::<Admin>::new(&mut ctx.session);
            let outcome = controller
                .delete_item(args.id, &prompt, ctx.confirm.as_mut())
                .await?;
            print_delete(outcome, "Admin deleted")?;
        }
        AdminCommand::ToggleStatus(args) => {
            let mut controller = ResourceController::<Admin>::new(&mut ctx.session);
            let view = controller
                .apply_one(
                    &toggle_status_path(&args.name),
                    RequestOptions::new(Method::POST),
                    "Toggling admin status",
                )
                .await?;
            print_view(view)?;
        }
        AdminCommand::Exists(args) => {
            let exists = check_name_exists(&mut ctx.session, Admin::KIND, &args.name).await?;
            println!("{exists}");
        }
    }
    Ok(())
}
