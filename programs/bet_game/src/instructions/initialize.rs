use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::DISCRIMINATOR_SIZE;
use crate::events::RegistryInitialized;
use crate::state::Registry;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR_SIZE + Registry::INIT_SPACE,
        seeds = [Registry::SEED],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Registry-owned token account holding escrow and retained fees.
    #[account(
        init,
        payer = admin,
        associated_token::mint = mint,
        associated_token::authority = registry,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Token staked in every pool.
    pub mint: Account<'info, Mint>,

    /// Becomes the registry admin for good.
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(ctx: Context<Initialize>, reward_multiplier: u8) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let mint = ctx.accounts.mint.key();
    let vault = ctx.accounts.vault.key();

    let registry = &mut ctx.accounts.registry;
    registry.configure(admin, mint, vault, reward_multiplier, ctx.bumps.registry)?;

    msg!(
        "Registry initialized: admin {}, reward multiplier {}%",
        admin,
        reward_multiplier
    );

    emit!(RegistryInitialized {
        admin,
        mint,
        vault,
        reward_multiplier,
    });

    Ok(())
}
